use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, and Actions)
// =============================================================================

/// Errors raised by the framework itself, independent of any entity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Operation not supported by this collection: {0}")]
    Unsupported(&'static str),
}

/// Trait that any stored document must implement to be managed by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: From<FrameworkError> + Send + Sync + Debug + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge creation params into an existing document. Collections that
    /// do not support upsert keep the default.
    fn on_upsert(&mut self, _params: Self::CreateParams) -> Result<(), Self::Error> {
        Err(FrameworkError::Unsupported("upsert").into())
    }

    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action. On error the document must be left untouched.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A read over one collection: predicate, optional ordering, optional limit.
///
/// Results start in insertion order and are sorted stably, so documents that
/// compare equal keep the order the store delivered them in.
pub struct Query<T> {
    filter: Option<Filter<T>>,
    sort: Option<Comparator<T>>,
    limit: Option<usize>,
}

impl<T> Query<T> {
    pub fn all() -> Self {
        Self {
            filter: None,
            sort: None,
            limit: None,
        }
    }

    pub fn filter(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.filter = Some(Box::new(predicate));
        self
    }

    pub fn sort_by(mut self, compare: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.sort = Some(Box::new(compare));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, item: &T) -> bool {
        self.filter.as_ref().map_or(true, |f| f(item))
    }

    /// Evaluates the query over `items`, which are taken in store order.
    pub fn run<'a>(&self, items: impl Iterator<Item = &'a T>) -> Vec<T>
    where
        T: Clone + 'a,
    {
        let mut out: Vec<T> = items.filter(|item| self.matches(item)).cloned().collect();
        if let Some(compare) = &self.sort {
            out.sort_by(|a, b| compare(a, b));
        }
        if let Some(limit) = self.limit {
            out.truncate(limit);
        }
        out
    }
}

impl<T> Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("sorted", &self.sort.is_some())
            .field("limit", &self.limit)
            .finish()
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Upsert {
        id: T::Id,
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Query {
        query: Query<T>,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// Owns one collection. Requests are served one at a time, which makes every
/// write atomic per document.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
    next_id_fn: Option<IdGenerator<T::Id>>,
}

impl<T: Entity> ResourceActor<T> {
    /// Collection whose ids are generated on `Create`.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, Some(Box::new(next_id_fn)))
    }

    /// Collection keyed by caller-supplied ids; only `Upsert` inserts.
    pub fn keyed(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    fn build(buffer_size: usize, next_id_fn: Option<IdGenerator<T::Id>>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
            next_id_fn,
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        debug!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::Upsert { id, params, respond_to } => {
                    let _ = respond_to.send(self.handle_upsert(id, params));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Query { query, respond_to } => {
                    let items = self.insertion_order.iter().filter_map(|id| self.store.get(id));
                    let _ = respond_to.send(Ok(query.run(items)));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
            }
        }
        debug!("ResourceActor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, T::Error> {
        let next_id = self
            .next_id_fn
            .as_ref()
            .ok_or(FrameworkError::Unsupported("create"))?;
        let id = next_id();
        let mut item = T::from_create_params(id.clone(), params)?;
        item.on_create()?;
        self.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_upsert(&mut self, id: T::Id, params: T::CreateParams) -> Result<T, T::Error> {
        if let Some(existing) = self.store.get_mut(&id) {
            // Hooks work on a copy so a rejected merge leaves the document as it was.
            let mut merged = existing.clone();
            merged.on_upsert(params)?;
            *existing = merged.clone();
            return Ok(merged);
        }
        let mut item = T::from_create_params(id.clone(), params)?;
        item.on_create()?;
        self.insert(id, item.clone());
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        let existing = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut updated = existing.clone();
        updated.on_update(patch)?;
        *existing = updated.clone();
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), T::Error> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete()?;
        self.store.remove(&id);
        self.insertion_order.retain(|existing| existing != &id);
        Ok(())
    }

    fn handle_action(&mut self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        let existing = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let mut working = existing.clone();
        match working.handle_action(action) {
            Ok(result) => {
                *existing = working;
                Ok(result)
            }
            Err(e) => {
                warn!(id = %id, error = ?e, "Action rejected");
                Err(e)
            }
        }
    }

    fn insert(&mut self, id: T::Id, item: T) {
        if self.store.insert(id.clone(), item).is_none() {
            self.insertion_order.push(id);
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// Cloneable store handle for one collection.
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| <T::Error>::from(FrameworkError::ActorClosed))?;
        response
            .await
            .map_err(|_| <T::Error>::from(FrameworkError::ActorDropped))?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, T::Error> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn upsert(&self, id: T::Id, params: T::CreateParams) -> Result<T, T::Error> {
        self.call(|respond_to| ResourceRequest::Upsert { id, params, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, T::Error> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), T::Error> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn query(&self, query: Query<T>) -> Result<Vec<T>, T::Error> {
        self.call(|respond_to| ResourceRequest::Query { query, respond_to })
            .await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }
}
