pub mod api_utils;
pub mod components;
pub mod dialogs;
#[cfg(test)]
pub mod test_support;
