use chrono::{Duration, Utc};
use homecook_market::app_system::{setup_tracing, MarketConfig, MarketSystem};
use homecook_market::clients::PlaceOrder;
use homecook_market::domain::{
    CookProfileUpdate, CuisineType, DeliveryDetails, MealDetails, OrderStatus, Principal, WeeklySchedule,
};
use homecook_market::geo::Coordinates;
use homecook_market::order_actor::OrderPartition;
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "market.toml".to_string());
    let config = MarketConfig::load(&config_path);

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(config = %config_path, "Starting home-cook marketplace");

    let system = MarketSystem::new(&config);
    let cook = Principal::cook("cook_mei");
    let customer = Principal::customer("customer_sam");

    let span = tracing::info_span!("cook_onboarding");
    let meal = async {
        let profile = CookProfileUpdate {
            bio: "Dumplings folded to order".into(),
            specialties: [CuisineType::Chinese].into_iter().collect(),
            delivery_available: true,
            delivery_radius_km: Some(5.0),
            delivery_fee: Some(Decimal::new(350, 2)),
            minimum_order_amount: Some(Decimal::new(15, 0)),
            available_days: Default::default(),
            location: Some(Coordinates::new(51.5072, -0.1276)),
        };
        system.cook_client.save_profile(&cook, profile).await.map_err(|e| e.to_string())?;

        let details = MealDetails {
            name: "Pork & chive dumplings".into(),
            description: "Twelve pieces with black vinegar dip".into(),
            price: Decimal::new(900, 2),
            ingredients: vec!["pork".into(), "chives".into(), "wheat wrappers".into()],
            allergens: vec!["gluten".into()],
            cuisine: CuisineType::Chinese,
            preparation_minutes: 40,
            schedule: WeeklySchedule::every_day(),
            image_url: None,
        };
        system.meal_client.create_meal(&cook, details).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(meal_id = %meal.id, "Meal published");

    let filter = system.browse_filter(Some(Coordinates::new(51.5155, -0.1410)));
    let listings = system.meal_client.browse(filter).await.map_err(|e| e.to_string())?;
    for listing in &listings {
        info!(
            meal = %listing.item.name,
            distance = listing.distance_label().as_deref().unwrap_or("unknown"),
            "Meal nearby"
        );
    }

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        let request = PlaceOrder {
            meal_id: meal.id.clone(),
            quantity: 2,
            delivery: DeliveryDetails::delivery("221B Baker Street"),
            requested_time: Utc::now() + Duration::hours(2),
            special_instructions: Some("Extra vinegar".into()),
        };
        let order = system.order_client.place_order(&customer, request).await?;
        info!(order_id = %order.id, total = %order.total_amount, "Order placed");

        for next in [
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Completed,
        ] {
            system.order_client.transition(&cook, order.id.clone(), next).await?;
        }
        Ok::<_, homecook_market::order_actor::OrderError>(order.id)
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => {
            info!(order_id = %order_id, "Order completed");
            match system
                .review_client
                .submit_review(&customer, order_id, 5, "Perfectly crisp bottoms".into())
                .await
            {
                Ok(review) => info!(order_id = %review.order_id, rating = review.rating, "Review submitted"),
                Err(e) => error!(error = %e, "Review failed"),
            }
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    let mut board = system.order_board(cook.clone());
    let history = board.select(OrderPartition::History).await.map_err(|e| e.to_string())?;
    info!(count = history.len(), "Cook order history");
    drop(board);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
