//! Commerce error types.

use crate::checkout::OrderStatus;
use crate::ids::{AddressId, CategoryId, OrderId, ProductId};
use thiserror::Error;

/// Coarse classification of a failure.
///
/// The storefront only distinguishes "the thing you asked for does not
/// exist" from everything else; both surface to users as a plain message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operation referenced an unknown identifier.
    NotFound,
    /// Any other failure.
    Failure,
}

/// Errors that can occur in e-commerce operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product with id {0} not found")]
    ProductNotFound(ProductId),

    /// Category not found.
    #[error("Category with id {0} not found")]
    CategoryNotFound(CategoryId),

    /// Order not found by id.
    #[error("Order with id {0} not found")]
    OrderNotFound(OrderId),

    /// Order not found by its public order code.
    #[error("Order {0} not found")]
    OrderCodeNotFound(String),

    /// Address not found.
    #[error("Address with id {0} not found")]
    AddressNotFound(AddressId),

    /// Order can no longer be cancelled.
    #[error("Cannot cancel order that has already been {status}")]
    CannotCancel { status: OrderStatus },

    /// Order has no further fulfilment step.
    #[error("Order is already {status}")]
    CannotAdvance { status: OrderStatus },

    /// Checkout submitted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Checkout form is missing required fields.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CommerceError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommerceError::ProductNotFound(_)
            | CommerceError::CategoryNotFound(_)
            | CommerceError::OrderNotFound(_)
            | CommerceError::OrderCodeNotFound(_)
            | CommerceError::AddressNotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Failure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
