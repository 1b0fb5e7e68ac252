//! Access to files picked in `<input type="file">` elements.

#[cfg(feature = "web")]
use wasm_bindgen::JsCast;

/// Metadata of a picked file used for client-side checks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

#[cfg(feature = "web")]
fn file_input(input_id: &str) -> Option<web_sys::HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

/// First file picked in the input with id `input_id`
#[cfg(feature = "web")]
pub fn selected_file(input_id: &str) -> Option<web_sys::File> {
    file_input(input_id)?.files()?.get(0)
}

#[cfg(feature = "web")]
pub fn selected_file_info(input_id: &str) -> Option<FileInfo> {
    selected_file(input_id).map(|file| FileInfo {
        name: file.name(),
        content_type: file.type_(),
        size: file.size() as u64,
    })
}

#[cfg(not(feature = "web"))]
pub fn selected_file_info(_input_id: &str) -> Option<FileInfo> {
    None
}

/// Reset the input so a rejected file is not submitted later
#[cfg(feature = "web")]
pub fn clear_selected_file(input_id: &str) {
    if let Some(input) = file_input(input_id) {
        input.set_value("");
    }
}

#[cfg(not(feature = "web"))]
pub fn clear_selected_file(_input_id: &str) {}
