//! Type-erased descriptors.
//!
//! Typed operands make mixing generic and concrete descriptors a compile error. When the kind
//! is only known at runtime, [`AnyDescriptor`] carries either and reports the mix as a
//! [`DescriptorError::BinaryOperation`].

use crate::concrete::UnitDescriptor;
use crate::error::{DescriptorError, DescriptorResult};
use crate::generic::GenericDescriptor;
use core::fmt;

/// Either a generic or a concrete descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnyDescriptor {
    Generic(GenericDescriptor),
    Concrete(UnitDescriptor),
}

impl AnyDescriptor {
    pub fn checked_mul(&self, other: &AnyDescriptor) -> DescriptorResult<AnyDescriptor> {
        match (self, other) {
            (AnyDescriptor::Generic(a), AnyDescriptor::Generic(b)) => {
                Ok(AnyDescriptor::Generic((a * b).into()))
            }
            (AnyDescriptor::Concrete(a), AnyDescriptor::Concrete(b)) => {
                Ok(AnyDescriptor::Concrete((a * b).into()))
            }
            _ => Err(self.mixed("multiply", other)),
        }
    }

    pub fn checked_div(&self, other: &AnyDescriptor) -> DescriptorResult<AnyDescriptor> {
        match (self, other) {
            (AnyDescriptor::Generic(a), AnyDescriptor::Generic(b)) => {
                Ok(AnyDescriptor::Generic((a / b).into()))
            }
            (AnyDescriptor::Concrete(a), AnyDescriptor::Concrete(b)) => {
                Ok(AnyDescriptor::Concrete((a / b).into()))
            }
            _ => Err(self.mixed("divide", other)),
        }
    }

    pub fn checked_pow(&self, power: f64) -> DescriptorResult<AnyDescriptor> {
        match self {
            AnyDescriptor::Generic(generic) => generic.checked_pow(power).map(Into::into),
            AnyDescriptor::Concrete(concrete) => concrete.checked_pow(power).map(Into::into),
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, AnyDescriptor::Generic(_))
    }

    fn mixed(&self, operation: &'static str, other: &AnyDescriptor) -> DescriptorError {
        DescriptorError::BinaryOperation {
            operation,
            left: self.to_string(),
            right: other.to_string(),
        }
    }
}

impl fmt::Display for AnyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyDescriptor::Generic(generic) => fmt::Display::fmt(generic, f),
            AnyDescriptor::Concrete(concrete) => fmt::Display::fmt(concrete, f),
        }
    }
}

impl From<GenericDescriptor> for AnyDescriptor {
    fn from(generic: GenericDescriptor) -> Self {
        AnyDescriptor::Generic(generic)
    }
}

impl From<UnitDescriptor> for AnyDescriptor {
    fn from(concrete: UnitDescriptor) -> Self {
        AnyDescriptor::Concrete(concrete)
    }
}

impl TryFrom<AnyDescriptor> for GenericDescriptor {
    type Error = DescriptorError;

    fn try_from(descriptor: AnyDescriptor) -> DescriptorResult<GenericDescriptor> {
        match descriptor {
            AnyDescriptor::Generic(generic) => Ok(generic),
            AnyDescriptor::Concrete(concrete) => Err(DescriptorError::WrongDescriptorType {
                expected: "GenericDescriptor",
                descriptor: concrete.to_string(),
            }),
        }
    }
}

impl TryFrom<AnyDescriptor> for UnitDescriptor {
    type Error = DescriptorError;

    fn try_from(descriptor: AnyDescriptor) -> DescriptorResult<UnitDescriptor> {
        match descriptor {
            AnyDescriptor::Concrete(concrete) => Ok(concrete),
            AnyDescriptor::Generic(generic) => Err(DescriptorError::WrongDescriptorType {
                expected: "UnitDescriptor",
                descriptor: generic.to_string(),
            }),
        }
    }
}
