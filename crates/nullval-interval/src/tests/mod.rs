//! Cross-module properties of the interval types.

mod fixtures;
