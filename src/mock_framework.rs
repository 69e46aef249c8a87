//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, Query, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test owns. Each `expect_*` helper
/// awaits the next request, checks its kind and hands back the payload with
/// the responder, so the test decides what the "actor" answers.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T::Id, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Query<T>, Response<Vec<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::domain::{Meal, MealCreate, MealId, OrderId, Review};
    use crate::review_actor::ReviewError;
    use crate::test_support::meal_details;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Meal>(10);

        let create_task = tokio::spawn(async move {
            let params = MealCreate {
                cook_id: "bob".into(),
                details: meal_details("Gnocchi", dec!(11)),
                location: None,
                created_at: chrono::Utc::now(),
            };
            client.create(params).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.details.name, "Gnocchi");
        responder.send(Ok(MealId::from("meal_1"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(MealId::from("meal_1")));
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (client, mut receiver) = create_mock_client::<Review>(10);
        let get_task = tokio::spawn(async move { client.get(OrderId::from("order_1")).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        let result = get_task.await.unwrap();
        assert_eq!(result, Err(ReviewError::from(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    async fn test_closed_actor_surfaces_as_communication_error() {
        let (client, receiver) = create_mock_client::<Review>(10);
        drop(receiver);
        assert!(matches!(
            client.get(OrderId::from("order_1")).await,
            Err(ReviewError::ActorCommunicationError(_))
        ));
    }
}
