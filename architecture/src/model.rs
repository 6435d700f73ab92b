/// Marker for aggregate roots, the only types repositories accept.
pub trait AggregateRoot {}

/// Implements [`AggregateRoot`] for each listed type.
#[macro_export]
macro_rules! aggregate_root {
    ($($t:ty),* $(,)?) => {
        $(impl $crate::model::AggregateRoot for $t {})*
    };
}
