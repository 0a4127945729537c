// Letter composition: form data + explicit style selection -> HTML fragment.
// Export wraps the fragment in a print page; logo intake and presets feed the form.

pub mod composer;
pub mod export;
pub mod format;
pub mod handlers;
pub mod layouts;
pub mod logo;
pub mod models;
pub mod presets;
pub mod signature;
pub mod styles;
