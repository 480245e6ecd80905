//! Macros for declaring closed state and transition sets.

/// Declare a fieldless state enum and implement `State` and `Enumerable`.
///
/// Each state is named after its variant.
///
/// # Example
///
/// ```
/// use phasemap::core::{Enumerable, State};
/// use phasemap::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Solid,
///         Liquid,
///         Gas,
///     }
/// }
///
/// assert_eq!(Phase::Liquid.name(), "Liquid");
/// assert_eq!(Phase::ALL, &[Phase::Solid, Phase::Liquid, Phase::Gas]);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl $crate::core::Enumerable for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
        }
    };
}

/// Declare a fieldless transition enum over an existing state type.
///
/// Each variant names its edge as `Variant(From => To)`, where `From` and
/// `To` are unit variants of the state type. Implements `Transition` and
/// `Enumerable`; transition names are the variant identifiers.
///
/// # Example
///
/// ```
/// use phasemap::core::{Enumerable, Transition};
/// use phasemap::{state_enum, transition_enum};
///
/// state_enum! {
///     pub enum Light { Red, Green, Yellow }
/// }
///
/// transition_enum! {
///     pub enum Signal: Light {
///         Go(Red => Green),
///         Slow(Green => Yellow),
///         Stop(Yellow => Red),
///     }
/// }
///
/// assert_eq!(Signal::Slow.from(), &Light::Green);
/// assert_eq!(Signal::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! transition_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $state:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident ( $from:ident => $to:ident )
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::Transition for $name {
            type State = $state;

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            fn from(&self) -> &$state {
                match self {
                    $(Self::$variant => &<$state>::$from),+
                }
            }

            fn to(&self) -> &$state {
                match self {
                    $(Self::$variant => &<$state>::$to),+
                }
            }
        }

        impl $crate::core::Enumerable for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
        }
    };
}
