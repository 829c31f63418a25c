use crate::error::FormError;

/// An event whose default browser action can be suppressed
pub trait Cancelable {
    fn prevent_default(&self);
}

/// An element that can have submit listeners attached
pub trait SubmitTarget {
    type Event: Cancelable;

    fn add_submit_listener(&self, listener: Box<dyn FnMut(&Self::Event)>)
        -> Result<(), FormError>;
}

/// Registers `callback` to run once per submission of `form`, suppressing
/// the browser's own submission first.
pub fn attach_event_listener<T, F>(form: &T, mut callback: F) -> Result<(), FormError>
where
    T: SubmitTarget,
    F: FnMut() + 'static,
{
    form.add_submit_listener(Box::new(move |event: &T::Event| {
        event.prevent_default();
        callback();
    }))
}
