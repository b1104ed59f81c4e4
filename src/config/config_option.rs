use crate::context::ContextState;

/// A configurable value, together with the bounds of the value and the last state of a context in which the value may be changed.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used when reporting.
    pub name: &'static str,

    /// The least permitted value.
    pub min: T,

    /// The greatest permitted value.
    pub max: T,

    /// The last state of a context in which the value may be revised.
    pub max_state: ContextState,

    /// The value.
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// The bounds of the option, as a pair.
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if within bounds.
    ///
    /// Returns true if the value was set, and false otherwise.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => {
                log::warn!("Value for {} out of bounds", self.name);
                false
            }
        }
    }
}
