// SPDX-License-Identifier: MIT

//! Typed payloads for the built-in workflow namespaces
//!
//! Each multi-step workflow owns one disjoint namespace in the session
//! transport. The structs here enumerate the keys each workflow legally
//! writes, with every field optional so a payload is valid at any point in
//! the journey; the flattened `extra` map carries keys this version of the
//! code does not model, so they merge forward instead of being dropped on
//! save.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Built-in multi-step workflows, one session namespace each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workflow {
    /// Marine exemption application
    Exemption,
    /// Marine licence application
    MarineLicence,
    /// Pre-login guidance flow
    SignInGuidance,
}

impl Workflow {
    /// The top-level key this workflow owns in the session transport
    pub fn namespace(&self) -> &'static str {
        match self {
            Workflow::Exemption => "exemption",
            Workflow::MarineLicence => "marine-licence",
            Workflow::SignInGuidance => "sign-in-guidance",
        }
    }
}

/// Payload types that round-trip through a workflow namespace.
///
/// Implementors must serialize to a JSON object. `Default` is the
/// fully-absent payload returned when the namespace has never been written.
pub trait WorkflowPayload: Serialize + DeserializeOwned + Default + Send {}

/// Accumulated state for the exemption workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExemptionSession {
    /// Reference assigned by the backend once the draft application exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Activity the applicant selected from the exempt-activity list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// Per-step status object, keyed by step name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_details: Option<Value>,
    /// Cached task-list summary rendered on the progress page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_list: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowPayload for ExemptionSession {}

/// Accumulated state for the marine licence workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineLicenceSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_list: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowPayload for MarineLicenceSession {}

/// State for the pre-login guidance flow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInGuidanceSession {
    /// Page the user came from, for returning them after sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journey_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_acknowledged: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkflowPayload for SignInGuidanceSession {}
