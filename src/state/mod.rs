//! Client-side panel state.
//!
//! DESIGN
//! ======
//! `panel` is the single model the view renders from; `gestures` and
//! `shortcuts` are the static tables the view and the key handler consult.

pub mod gestures;
pub mod panel;
pub mod shortcuts;
