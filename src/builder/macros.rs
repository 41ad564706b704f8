//! Macros for declaring state enums.

/// Generate a `State` trait implementation for a simple enum.
///
/// The optional `sentinel:` clause names the placeholder variant a
/// [`StateCell`](crate::core::StateCell) starts in.
///
/// # Example
///
/// ```
/// use tickstate::core::State;
/// use tickstate::state_enum;
///
/// state_enum! {
///     pub enum MatchState {
///         Pending,
///         Playing,
///         Over,
///     }
///     sentinel: Pending
/// }
///
/// assert_eq!(MatchState::Playing.name(), "Playing");
/// assert!(MatchState::Pending.is_sentinel());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(sentinel: $sentinel:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_sentinel(&self) -> bool {
                match self {
                    $(Self::$sentinel => true,)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
