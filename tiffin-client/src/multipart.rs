//! Multipart form encoding for image-bearing menu payloads
//!
//! Create sends every field; update sends only the fields being
//! replaced. The image travels as a binary part named `image`.

use reqwest::multipart::{Form, Part};
use shared::models::{ImageUpload, MenuItemCreate, MenuItemUpdate};

use crate::error::ClientResult;

/// Text fields of a create payload, in wire order.
pub fn create_fields(payload: &MenuItemCreate) -> Vec<(&'static str, String)> {
    let mut fields = vec![("name", payload.name.clone())];
    if let Some(description) = &payload.description {
        fields.push(("description", description.clone()));
    }
    fields.push(("price", payload.price.to_string()));
    fields.push(("category", payload.category.as_str().to_string()));
    fields.push(("available", payload.available.to_string()));
    fields
}

/// Text fields of an update payload; absent fields are not sent.
pub fn update_fields(payload: &MenuItemUpdate) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(name) = &payload.name {
        fields.push(("name", name.clone()));
    }
    if let Some(description) = &payload.description {
        fields.push(("description", description.clone()));
    }
    if let Some(price) = payload.price {
        fields.push(("price", price.to_string()));
    }
    if let Some(category) = payload.category {
        fields.push(("category", category.as_str().to_string()));
    }
    if let Some(available) = payload.available {
        fields.push(("available", available.to_string()));
    }
    fields
}

fn image_part(image: &ImageUpload) -> ClientResult<Part> {
    let mime = if image.content_type.is_empty() {
        mime_guess::from_path(&image.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    } else {
        image.content_type.clone()
    };
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&mime)?;
    Ok(part)
}

pub fn create_form(payload: &MenuItemCreate) -> ClientResult<Form> {
    let mut form = Form::new();
    for (key, value) in create_fields(payload) {
        form = form.text(key, value);
    }
    if let Some(image) = &payload.image {
        form = form.part("image", image_part(image)?);
    }
    Ok(form)
}

pub fn update_form(payload: &MenuItemUpdate) -> ClientResult<Form> {
    let mut form = Form::new();
    for (key, value) in update_fields(payload) {
        form = form.text(key, value);
    }
    if let Some(image) = &payload.image {
        form = form.part("image", image_part(image)?);
    }
    Ok(form)
}
