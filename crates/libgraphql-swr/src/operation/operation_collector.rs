use crate::operation::Operation;

/// Accumulates every operation it is handed, in encounter order.
///
/// Nothing is filtered at record time: mutations, subscriptions and queries
/// that configuration will later exclude are all retained, so that emission can
/// re-derive every filtering decision from the full list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationCollector {
    operations: Vec<Operation>,
}
impl OperationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `operation` after every previously recorded operation.
    pub fn record(&mut self, operation: Operation) {
        log::trace!(
            "Recording {} operation `{}`.",
            operation.kind(),
            operation.name(),
        );
        self.operations.push(operation);
    }

    /// All recorded operations, in the order they were recorded.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
impl std::iter::Extend<Operation> for OperationCollector {
    fn extend<T: IntoIterator<Item = Operation>>(&mut self, iter: T) {
        for operation in iter {
            self.record(operation);
        }
    }
}
impl std::iter::FromIterator<Operation> for OperationCollector {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        let mut collector = Self::new();
        collector.extend(iter);
        collector
    }
}
