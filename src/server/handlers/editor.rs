//! Editor API: catalog listing, canvas rendering and properties forms.

use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, ComponentTemplate, ComponentTypeMeta};
use crate::document::{ComponentInstance, Document};
use crate::error::TesseraError;
use crate::render;
use crate::schema::{self, FieldEdit, FormSchema};

use super::ApiError;

/// GET /api/components - List component types.
pub async fn components() -> Json<Vec<ComponentTypeMeta>> {
    Json(catalog::component_types())
}

/// GET /api/components/:type - Template of one type.
pub async fn template(Path(type_name): Path<String>) -> Result<Json<ComponentTemplate>, ApiError> {
    let template = catalog::template(&type_name).ok_or(TesseraError::UnknownComponentType(type_name))?;
    Ok(Json(template))
}

/// Request body for rendering the canvas.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub instances: Vec<ComponentInstance>,
    #[serde(default)]
    pub selected: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
}

/// POST /api/render - Render instances as the editor canvas.
pub async fn render(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    let html = render::render_instances(&req.instances, req.selected).to_html();
    Json(RenderResponse { html })
}

/// Request body for the properties form.
///
/// With `edit` set, the edit is applied first and the response carries the
/// updated instance along with its regenerated form.
#[derive(Debug, Deserialize)]
pub struct SchemaRequest {
    pub instance: ComponentInstance,
    #[serde(default)]
    pub edit: Option<FieldEdit>,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub instance: ComponentInstance,
    pub form: FormSchema,
}

/// POST /api/schema - Properties form for an instance.
pub async fn schema(Json(req): Json<SchemaRequest>) -> Result<Json<SchemaResponse>, ApiError> {
    let id = req.instance.id;
    let mut document = Document::from_instances(vec![req.instance], 1);
    if let Some(edit) = &req.edit {
        edit.apply(&mut document, id)?;
    }
    let instance = document
        .into_instances()
        .pop()
        .ok_or(TesseraError::NotFound(id))?;
    let form = schema::form_for(&instance)
        .ok_or_else(|| TesseraError::UnknownComponentType(instance.type_name.clone()))?;
    Ok(Json(SchemaResponse { instance, form }))
}
