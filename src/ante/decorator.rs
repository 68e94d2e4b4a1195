use crate::{AnteError, Context, FilterError, Msg, Tx};
use tracing::{debug, warn};

/// A check applied to a single message before execution
///
/// Filters are pure: the same message always yields the same outcome and
/// nothing is mutated. Plain functions and closures with the signature
/// `Fn(&Context, &Msg, bool) -> Result<(), FilterError>` are filters too.
pub trait MessageFilter: Send + Sync {
    /// Name reported when this filter rejects a message
    fn name(&self) -> &str;

    /// Accept the message or return the reason it is rejected
    fn check(&self, ctx: &Context, msg: &Msg, simulate: bool) -> Result<(), FilterError>;
}

impl<F> MessageFilter for F
where
    F: Fn(&Context, &Msg, bool) -> Result<(), FilterError> + Send + Sync,
{
    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }

    fn check(&self, ctx: &Context, msg: &Msg, simulate: bool) -> Result<(), FilterError> {
        self(ctx, msg, simulate)
    }
}

/// The remainder of the ante pipeline, invoked once a stage accepts a transaction
pub trait AnteHandler: Send + Sync {
    fn handle(&self, ctx: &Context, tx: &Tx, simulate: bool) -> Result<Context, AnteError>;
}

impl<F> AnteHandler for F
where
    F: Fn(&Context, &Tx, bool) -> Result<Context, AnteError> + Send + Sync,
{
    fn handle(&self, ctx: &Context, tx: &Tx, simulate: bool) -> Result<Context, AnteError> {
        self(ctx, tx, simulate)
    }
}

/// Last stage of a pipeline: accepts the transaction and hands back the context
pub fn terminator(ctx: &Context, _tx: &Tx, _simulate: bool) -> Result<Context, AnteError> {
    Ok(ctx.clone())
}

/// A pipeline stage that may reject a transaction before calling `next`
pub trait AnteDecorator: Send + Sync {
    fn ante_handle(
        &self,
        ctx: &Context,
        tx: &Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<Context, AnteError>;
}

/// Runs a fixed list of message filters before calling the next ante handler
///
/// Every filter is applied to every message: messages in transaction order,
/// filters in the order they were given. The first rejection aborts the
/// transaction and `next` is not called.
pub struct MessageFilterDecorator {
    filters: Vec<Box<dyn MessageFilter>>,
}

impl MessageFilterDecorator {
    /// Creates a decorator running `filters` in the given order
    pub fn new(filters: Vec<Box<dyn MessageFilter>>) -> Self {
        Self { filters }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the registered filters, in run order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply every filter to every message of `tx`
    ///
    /// # Returns
    /// * `Ok(())` if all (message, filter) pairs accept
    /// * `Err(AnteError::FilterInvariantViolated)` for the first pair that rejects
    pub fn check_msgs(&self, ctx: &Context, tx: &Tx, simulate: bool) -> Result<(), AnteError> {
        for (msg_index, msg) in tx.msgs().iter().enumerate() {
            for filter in &self.filters {
                if let Err(source) = filter.check(ctx, msg, simulate) {
                    warn!(
                        "Message {} ({}) rejected by filter {}: {}",
                        msg_index,
                        msg.type_url(),
                        filter.name(),
                        source
                    );
                    return Err(AnteError::FilterInvariantViolated {
                        msg_index,
                        filter: filter.name().to_string(),
                        source,
                    });
                }
            }
        }

        Ok(())
    }
}

impl AnteDecorator for MessageFilterDecorator {
    fn ante_handle(
        &self,
        ctx: &Context,
        tx: &Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<Context, AnteError> {
        debug!(
            "Running {} message filters over {} messages (simulate: {})",
            self.filters.len(),
            tx.msgs().len(),
            simulate
        );

        self.check_msgs(ctx, tx, simulate)?;
        next.handle(ctx, tx, simulate)
    }
}
