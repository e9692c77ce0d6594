//! Contract catalog for the console's record types.
//!
//! Each record type maps to one collection whose name is the lowercase form
//! of the type name. Contracts are built once and resolved through the
//! `RecordKind` enum; only `from_collection` does a runtime string lookup.

use once_cell::sync::Lazy;
use serde_json::json;

use super::contract::{Contract, ElemKind, FieldKind, FieldSpec};

/// Service lines offered to clients.
pub const SERVICE_TYPES: &[&str] = &[
    "AI Engine",
    "Prompt",
    "Creative",
    "Audit",
    "Persona",
    "Subscription",
    "Business Ops",
];

/// Engagement pipeline stages.
pub const STATUS_TYPES: &[&str] = &[
    "Discovery",
    "Scoping",
    "In Progress",
    "In Review",
    "Deliverables Drafted",
    "Awaiting Feedback",
    "Done",
    "Blocked",
];

pub const PRIORITY_TYPES: &[&str] = &["Low", "Medium", "High", "Critical"];

const TARGET_MODELS: &[&str] = &["Internal", "External"];
const ENGINE_FLAVORS: &[&str] = &["Off-the-shelf", "Custom-tailored"];
const TIER_NAMES: &[&str] = &["Entry", "Growth", "Pro"];

/// Record types with a registered contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Client,
    Project,
    Task,
    Prompt,
    PromptSet,
    EngineBlueprint,
    CreativeBrief,
    ContentCalendarItem,
    WorkflowAudit,
    PersonaKit,
    SubscriptionTierPlan,
}

impl RecordKind {
    pub fn from_collection(name: &str) -> Option<RecordKind> {
        match name {
            "client" => Some(RecordKind::Client),
            "project" => Some(RecordKind::Project),
            "task" => Some(RecordKind::Task),
            "prompt" => Some(RecordKind::Prompt),
            "promptset" => Some(RecordKind::PromptSet),
            "engineblueprint" => Some(RecordKind::EngineBlueprint),
            "creativebrief" => Some(RecordKind::CreativeBrief),
            "contentcalendaritem" => Some(RecordKind::ContentCalendarItem),
            "workflowaudit" => Some(RecordKind::WorkflowAudit),
            "personakit" => Some(RecordKind::PersonaKit),
            "subscriptiontierplan" => Some(RecordKind::SubscriptionTierPlan),
            _ => None,
        }
    }

    pub fn contract(self) -> &'static Contract {
        match self {
            RecordKind::Client => &CLIENT,
            RecordKind::Project => &PROJECT,
            RecordKind::Task => &TASK,
            RecordKind::Prompt => &PROMPT,
            RecordKind::PromptSet => &PROMPT_SET,
            RecordKind::EngineBlueprint => &ENGINE_BLUEPRINT,
            RecordKind::CreativeBrief => &CREATIVE_BRIEF,
            RecordKind::ContentCalendarItem => &CONTENT_CALENDAR_ITEM,
            RecordKind::WorkflowAudit => &WORKFLOW_AUDIT,
            RecordKind::PersonaKit => &PERSONA_KIT,
            RecordKind::SubscriptionTierPlan => &SUBSCRIPTION_TIER_PLAN,
        }
    }

    pub fn collection(self) -> &'static str {
        self.contract().collection
    }
}

/// Look up the validation contract for a collection name. `None` means the
/// collection is unregistered and payloads pass through untouched.
pub fn resolve(collection: &str) -> Option<&'static Contract> {
    RecordKind::from_collection(collection).map(RecordKind::contract)
}

static CLIENT: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "client",
    fields: vec![
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("contact", FieldKind::Text),
        FieldSpec::optional("services", FieldKind::List(ElemKind::Choice(SERVICE_TYPES)))
            .with_default(json!([])),
        FieldSpec::optional("status", FieldKind::Choice(STATUS_TYPES))
            .with_default(json!("Discovery")),
        FieldSpec::optional("next_action", FieldKind::Text),
        FieldSpec::optional("notes", FieldKind::Text),
    ],
});

static PROJECT: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "project",
    fields: vec![
        FieldSpec::optional("client_id", FieldKind::Text),
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("service_type", FieldKind::Choice(SERVICE_TYPES)),
        FieldSpec::optional("status", FieldKind::Choice(STATUS_TYPES))
            .with_default(json!("Discovery")),
        FieldSpec::optional("due_date", FieldKind::Date),
        FieldSpec::optional("checklist", FieldKind::List(ElemKind::Text)).with_default(json!([])),
    ],
});

static TASK: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "task",
    fields: vec![
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("service_tag", FieldKind::Choice(SERVICE_TYPES)),
        FieldSpec::optional("priority", FieldKind::Choice(PRIORITY_TYPES))
            .with_default(json!("Medium")),
        FieldSpec::optional("due_date", FieldKind::Date),
        FieldSpec::optional("notes", FieldKind::Text),
        FieldSpec::optional("client_id", FieldKind::Text),
        FieldSpec::optional("project_id", FieldKind::Text),
        FieldSpec::optional("done", FieldKind::Bool).with_default(json!(false)),
    ],
});

static PROMPT: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "prompt",
    fields: vec![
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("target_model", FieldKind::Choice(TARGET_MODELS))
            .with_default(json!("External")),
        FieldSpec::optional("use_case", FieldKind::Text),
        FieldSpec::optional("tags", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::required("text", FieldKind::Text),
        FieldSpec::optional("variants", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("notes", FieldKind::Text),
    ],
});

static PROMPT_SET: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "promptset",
    fields: vec![
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::optional("client_id", FieldKind::Text),
        FieldSpec::optional("service_type", FieldKind::Choice(SERVICE_TYPES)),
        FieldSpec::optional("prompt_ids", FieldKind::List(ElemKind::Text)).with_default(json!([])),
    ],
});

static ENGINE_BLUEPRINT: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "engineblueprint",
    fields: vec![
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("flavor", FieldKind::Choice(ENGINE_FLAVORS)),
        FieldSpec::required("purpose", FieldKind::Text),
        FieldSpec::optional("domain", FieldKind::Text),
        FieldSpec::optional("knowledge_sources", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::optional("persona", FieldKind::Text),
        FieldSpec::optional("input_format", FieldKind::Text),
        FieldSpec::optional("output_format", FieldKind::Text),
        FieldSpec::optional("guardrails", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("client_id", FieldKind::Text),
    ],
});

static CREATIVE_BRIEF: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "creativebrief",
    fields: vec![
        FieldSpec::optional("project_id", FieldKind::Text),
        FieldSpec::optional("platforms", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("audience", FieldKind::Text),
        FieldSpec::optional("goal", FieldKind::Text),
        FieldSpec::optional("tone_style", FieldKind::Text),
        FieldSpec::optional("deliverables", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::optional("formats", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("timeline", FieldKind::List(ElemKind::Text)).with_default(json!([])),
    ],
});

static CONTENT_CALENDAR_ITEM: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "contentcalendaritem",
    fields: vec![
        FieldSpec::optional("project_id", FieldKind::Text),
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("publish_date", FieldKind::Date),
        FieldSpec::optional("channel", FieldKind::Text),
    ],
});

static WORKFLOW_AUDIT: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "workflowaudit",
    fields: vec![
        FieldSpec::optional("client_id", FieldKind::Text),
        FieldSpec::optional("tools", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("steps", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("triggers", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("pain_points", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::optional("optimizations", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::optional("report_summary", FieldKind::Text),
    ],
});

static PERSONA_KIT: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "personakit",
    fields: vec![
        FieldSpec::optional("client_id", FieldKind::Text),
        FieldSpec::optional("mission", FieldKind::Text),
        FieldSpec::optional("values", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("audience", FieldKind::Text),
        FieldSpec::optional("slogans", FieldKind::List(ElemKind::Text)).with_default(json!([])),
        FieldSpec::optional("references", FieldKind::List(ElemKind::Url)).with_default(json!([])),
        FieldSpec::optional("tone_axes", FieldKind::Map).with_default(json!({})),
        FieldSpec::optional("how_sound", FieldKind::Text),
        FieldSpec::optional("how_never_sound", FieldKind::Text),
        FieldSpec::optional("lexicon_prefer", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::optional("lexicon_avoid", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
    ],
});

static SUBSCRIPTION_TIER_PLAN: Lazy<Contract> = Lazy::new(|| Contract {
    collection: "subscriptiontierplan",
    fields: vec![
        FieldSpec::required("name", FieldKind::Choice(TIER_NAMES)),
        FieldSpec::required("prompt_pack_volume", FieldKind::Text),
        FieldSpec::optional("toolkit_access", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::optional("integration_resources", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::required("model_library_access", FieldKind::Text),
        FieldSpec::optional("support_components", FieldKind::List(ElemKind::Text))
            .with_default(json!([])),
        FieldSpec::optional("notes", FieldKind::Text),
    ],
});
