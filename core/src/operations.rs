//! Element operations: fixed endpoints and methods over `dispatch`.
//!
//! Every method here is a thin call-site. The generic forms take a
//! `ManagedElement`; the per-kind forms fix it. Bodies are serialized to JSON
//! once, here, and then passed through the dispatcher untouched.
//!
//! Method conventions of the Ardoq API:
//!
//! | operation | method | endpoint    |
//! |-----------|--------|-------------|
//! | get all   | GET    | `kind`      |
//! | get by id | GET    | `kind/id`   |
//! | create    | POST   | `kind`      |
//! | update    | PATCH  | `kind/id`   |
//! | replace   | POST   | `kind/id`   |
//! | delete    | DELETE | `kind/id`   |
//! | search    | GET    | `kind?…`    |

use serde::Serialize;
use serde_json::Value;

use crate::client::ArdoqClient;
use crate::element::{ElementRef, FieldQuery, ManagedElement};
use crate::error::ApiError;
use crate::http::{HttpMethod, RequestOptions};
use crate::transport::Transport;

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(ApiError::Serialization)
}

impl<T: Transport> ArdoqClient<T> {
    // ---------------------------------------------------------------------
    // Generic
    // ---------------------------------------------------------------------

    /// Unpaginated listing of every element of `kind`.
    pub async fn get_all_elements(&self, kind: ManagedElement) -> Result<Value, ApiError> {
        self.dispatch(kind.as_str(), RequestOptions::new(), &[]).await
    }

    pub async fn get_element_by_id(
        &self,
        kind: ManagedElement,
        id: &str,
    ) -> Result<Value, ApiError> {
        let target = ElementRef::new(kind, id);
        self.dispatch(&target.endpoint(), RequestOptions::new(), &[]).await
    }

    pub async fn create_element<B: Serialize + ?Sized>(
        &self,
        kind: ManagedElement,
        body: &B,
    ) -> Result<Value, ApiError> {
        let options = RequestOptions::new()
            .method(HttpMethod::Post)
            .body(encode_body(body)?);
        self.dispatch(kind.as_str(), options, &[]).await
    }

    /// Send `method` to `kind/id`, attaching `body` only when given.
    pub async fn change_element<B: Serialize + ?Sized>(
        &self,
        kind: ManagedElement,
        id: &str,
        method: HttpMethod,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let mut options = RequestOptions::new().method(method);
        if let Some(body) = body {
            options = options.body(encode_body(body)?);
        }
        let target = ElementRef::new(kind, id);
        self.dispatch(&target.endpoint(), options, &[]).await
    }

    /// PATCH: the server merges the given fields.
    pub async fn update_element<B: Serialize + ?Sized>(
        &self,
        kind: ManagedElement,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.change_element(kind, id, HttpMethod::Patch, Some(body)).await
    }

    /// POST to the instance URL, which Ardoq treats as a full replace.
    pub async fn replace_element<B: Serialize + ?Sized>(
        &self,
        kind: ManagedElement,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.change_element(kind, id, HttpMethod::Post, Some(body)).await
    }

    /// DELETE with no request body.
    pub async fn delete_element(&self, kind: ManagedElement, id: &str) -> Result<Value, ApiError> {
        self.change_element(kind, id, HttpMethod::Delete, None::<&Value>).await
    }

    pub async fn delete_element_with_body<B: Serialize + ?Sized>(
        &self,
        kind: ManagedElement,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.change_element(kind, id, HttpMethod::Delete, Some(body)).await
    }

    /// GET `kind?field=<field>&value=<value>`.
    pub async fn search_by_field(
        &self,
        kind: ManagedElement,
        query: &FieldQuery,
    ) -> Result<Value, ApiError> {
        let options = RequestOptions::new().method(HttpMethod::Get);
        self.dispatch(kind.as_str(), options, &query.as_params()).await
    }

    /// GET `kind?name=<name>`.
    pub async fn search_by_name(
        &self,
        kind: ManagedElement,
        name: &str,
    ) -> Result<Value, ApiError> {
        let options = RequestOptions::new().method(HttpMethod::Get);
        self.dispatch(kind.as_str(), options, &[("name", name)]).await
    }

    // ---------------------------------------------------------------------
    // Workspaces
    // ---------------------------------------------------------------------

    pub async fn get_all_workspaces(&self) -> Result<Value, ApiError> {
        self.get_all_elements(ManagedElement::Workspace).await
    }

    pub async fn get_workspace_by_id(&self, id: &str) -> Result<Value, ApiError> {
        self.get_element_by_id(ManagedElement::Workspace, id).await
    }

    pub async fn create_workspace<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.create_element(ManagedElement::Workspace, body).await
    }

    pub async fn update_workspace<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.update_element(ManagedElement::Workspace, id, body).await
    }

    pub async fn replace_workspace<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.replace_element(ManagedElement::Workspace, id, body).await
    }

    pub async fn delete_workspace(&self, id: &str) -> Result<Value, ApiError> {
        self.delete_element(ManagedElement::Workspace, id).await
    }

    // ---------------------------------------------------------------------
    // Components
    // ---------------------------------------------------------------------

    pub async fn get_all_components(&self) -> Result<Value, ApiError> {
        self.get_all_elements(ManagedElement::Component).await
    }

    pub async fn get_component_by_id(&self, id: &str) -> Result<Value, ApiError> {
        self.get_element_by_id(ManagedElement::Component, id).await
    }

    pub async fn create_component<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.create_element(ManagedElement::Component, body).await
    }

    pub async fn update_component<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.update_element(ManagedElement::Component, id, body).await
    }

    pub async fn replace_component<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.replace_element(ManagedElement::Component, id, body).await
    }

    pub async fn delete_component(&self, id: &str) -> Result<Value, ApiError> {
        self.delete_element(ManagedElement::Component, id).await
    }

    /// The workspace id is not sent; the API searches across workspaces.
    pub async fn search_component_by_name(
        &self,
        _workspace_id: &str,
        name: &str,
    ) -> Result<Value, ApiError> {
        self.search_by_name(ManagedElement::Component, name).await
    }

    /// The workspace id is not sent; the API searches across workspaces.
    pub async fn search_component_by_field(
        &self,
        _workspace_id: &str,
        query: &FieldQuery,
    ) -> Result<Value, ApiError> {
        self.search_by_field(ManagedElement::Component, query).await
    }

    // ---------------------------------------------------------------------
    // References
    // ---------------------------------------------------------------------

    pub async fn get_all_references(&self) -> Result<Value, ApiError> {
        self.get_all_elements(ManagedElement::Reference).await
    }

    pub async fn get_reference_by_id(&self, id: &str) -> Result<Value, ApiError> {
        self.get_element_by_id(ManagedElement::Reference, id).await
    }

    pub async fn create_reference<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.create_element(ManagedElement::Reference, body).await
    }

    pub async fn update_reference<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.update_element(ManagedElement::Reference, id, body).await
    }

    pub async fn replace_reference<B: Serialize + ?Sized>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.replace_element(ManagedElement::Reference, id, body).await
    }

    pub async fn delete_reference(&self, id: &str) -> Result<Value, ApiError> {
        self.delete_element(ManagedElement::Reference, id).await
    }

    /// The workspace id is not sent; the API searches across workspaces.
    pub async fn search_reference_by_field(
        &self,
        _workspace_id: &str,
        query: &FieldQuery,
    ) -> Result<Value, ApiError> {
        self.search_by_field(ManagedElement::Reference, query).await
    }
}
