//! Macros for wiring the standard operator traits to the checked methods of
//! the decimal types. The operators panic on overflow, same as the primitive
//! integers do with overflow checks enabled; code that needs to handle the
//! failure calls the `checked_*` method directly.

macro_rules! impl_op {
    ($t:ty, $imp:ident, $method:ident, $checked:ident) => {
        impl std::ops::$imp for $t {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                self.$checked(other).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($t:ty, $imp:ident, $method:ident, $checked:ident) => {
        impl std::ops::$imp for $t {
            fn $method(&mut self, other: Self) {
                *self = (*self).$checked(other).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

pub(crate) use {impl_assign_op, impl_op};
