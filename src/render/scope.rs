use std::ops::{Deref, DerefMut};

use crate::render::DrawingContext;

/// Saved drawing-context state, restored when the scope drops.
///
/// Every exit path (early return, `?`, panic unwinding) releases the scope,
/// so nested draws cannot leak transform or style state into siblings.
/// Scopes nest: open a child scope on `&mut *scope`.
pub struct ContextScope<'a, C: DrawingContext + ?Sized> {
    context: &'a mut C,
}

impl<'a, C: DrawingContext + ?Sized> ContextScope<'a, C> {
    pub fn new(context: &'a mut C) -> Self {
        context.save();
        Self { context }
    }
}

impl<C: DrawingContext + ?Sized> Deref for ContextScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl<C: DrawingContext + ?Sized> DerefMut for ContextScope<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl<C: DrawingContext + ?Sized> Drop for ContextScope<'_, C> {
    fn drop(&mut self) {
        self.context.restore();
    }
}
