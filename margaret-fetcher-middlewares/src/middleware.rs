//! Middleware trait and composition.
//!
//! A middleware is one async step in a response pipeline. Steps are joined
//! with `then`, and the first error short-circuits the rest of the chain.

use crate::error::MiddlewareResult;
use async_trait::async_trait;
use std::future::Future;
use tracing::trace;

/// One step of a response-processing pipeline.
#[async_trait]
pub trait ResponseMiddleware<In: Send + 'static>: Send + Sync {
    /// Value produced by this step.
    type Output: Send + 'static;

    /// Process the input.
    async fn handle(&self, input: In) -> MiddlewareResult<Self::Output>;

    /// Name used in log events.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Two middlewares run in sequence.
///
/// The output of `first` is the input of `second`.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    /// Join two middlewares.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Append another step.
    pub fn then<C>(self, next: C) -> Chain<Self, C> {
        Chain::new(self, next)
    }

    /// Get the first step.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get the second step.
    pub fn second(&self) -> &B {
        &self.second
    }
}

#[async_trait]
impl<In, A, B> ResponseMiddleware<In> for Chain<A, B>
where
    In: Send + 'static,
    A: ResponseMiddleware<In>,
    B: ResponseMiddleware<A::Output>,
{
    type Output = B::Output;

    async fn handle(&self, input: In) -> MiddlewareResult<Self::Output> {
        trace!(step = self.first.name(), "Running middleware");
        let intermediate = self.first.handle(input).await?;
        trace!(step = self.second.name(), "Running middleware");
        self.second.handle(intermediate).await
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

/// Middleware built from an async closure.
///
/// # Example
///
/// ```ignore
/// use margaret_fetcher_middlewares::{FnMiddleware, MiddlewareError, ParseJson, ParsedResponse};
///
/// let pipeline = ParseJson::new().then(FnMiddleware::new("require_data", |r: ParsedResponse| async move {
///     r.into_data().ok_or_else(|| MiddlewareError::from(anyhow::anyhow!("missing body")))
/// }));
/// ```
#[derive(Clone)]
pub struct FnMiddleware<F> {
    name: &'static str,
    f: F,
}

impl<F> FnMiddleware<F> {
    /// Wrap a closure.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Append another step.
    pub fn then<C>(self, next: C) -> Chain<Self, C> {
        Chain::new(self, next)
    }
}

impl<F> std::fmt::Debug for FnMiddleware<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnMiddleware")
            .field("name", &self.name)
            .finish()
    }
}

#[async_trait]
impl<In, Out, F, Fut> ResponseMiddleware<In> for FnMiddleware<F>
where
    In: Send + 'static,
    Out: Send + 'static,
    F: Fn(In) -> Fut + Send + Sync,
    Fut: Future<Output = MiddlewareResult<Out>> + Send,
{
    type Output = Out;

    async fn handle(&self, input: In) -> MiddlewareResult<Out> {
        (self.f)(input).await
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
