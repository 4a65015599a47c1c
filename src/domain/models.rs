use std::fmt;

use serde::{Deserialize, Serialize};

pub const WORKFLOW_NAME: &str = "MieCompleteWorkflow";
pub const THUMBNAIL_POSITION: &str = "10";
pub const TRANSCRIBE_LANGUAGE: &str = "en-US";
pub const TRANSLATE_SOURCE_LANGUAGE: &str = "en";
pub const TRANSLATE_TARGET_LANGUAGE: &str = "es";
pub const DATAPLANE_BUCKET: &str = "mie-dataplane-1oufs3l5cabvb";
const UNDEFINED: &str = "undefined";

/// A newly created object that should be run through the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerNotification {
    pub bucket: String,
    pub key: String,
}

/// Short-lived identity credential, used once as the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct IdToken(String);

impl IdToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdToken(***)")
    }
}

/// Fixed service-level login for the identity pool.
#[derive(Clone)]
pub struct ServiceCredentials {
    pub user_pool_id: String,
    pub client_id: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ServiceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredentials")
            .field("user_pool_id", &self.user_pool_id)
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkflowConfiguration {
    pub name: String,
    pub configuration: StageConfiguration,
    pub input: WorkflowInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageConfiguration {
    pub default_prelim_video_stage: PrelimVideoStage,
    pub default_video_stage: VideoStage,
    pub default_audio_stage: AudioStage,
    pub default_text_stage: TextStage,
    pub default_text_synthesis_stage: TextSynthesisStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Toggle {
    pub enabled: bool,
}

impl Toggle {
    pub const ON: Toggle = Toggle { enabled: true };
    pub const OFF: Toggle = Toggle { enabled: false };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrelimVideoStage {
    pub thumbnail: ThumbnailOperator,
    pub mediainfo: Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThumbnailOperator {
    pub thumbnail_position: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStage {
    pub face_detection: Toggle,
    pub technical_cue_detection: Toggle,
    pub shot_detection: Toggle,
    pub celebrity_recognition: Toggle,
    pub label_detection: Toggle,
    #[serde(rename = "Mediaconvert")]
    pub mediaconvert: Toggle,
    pub content_moderation: Toggle,
    pub face_search: FaceSearchOperator,
    pub text_detection: Toggle,
    #[serde(rename = "GenericDataLookup")]
    pub generic_data_lookup: DataLookupOperator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FaceSearchOperator {
    pub enabled: bool,
    pub collection_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataLookupOperator {
    pub enabled: bool,
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioStage {
    pub transcribe: TranscribeOperator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscribeOperator {
    pub enabled: bool,
    pub transcribe_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextStage {
    pub translate: TranslateOperator,
    pub comprehend_entities: Toggle,
    pub comprehend_key_phrases: Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateOperator {
    pub enabled: bool,
    pub source_language_code: String,
    pub target_language_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextSynthesisStage {
    pub polly: Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkflowInput {
    pub media: MediaInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaInput {
    pub video: S3Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Location {
    pub s3_bucket: String,
    pub s3_key: String,
}

/// Builds the complete media-analysis workflow for one video object.
///
/// Every stage toggle is fixed; only the input media location depends on
/// the arguments.
pub fn build_workflow_config(bucket: &str, key: &str) -> WorkflowConfiguration {
    WorkflowConfiguration {
        name: WORKFLOW_NAME.to_string(),
        configuration: StageConfiguration {
            default_prelim_video_stage: PrelimVideoStage {
                thumbnail: ThumbnailOperator {
                    thumbnail_position: THUMBNAIL_POSITION.to_string(),
                    enabled: true,
                },
                mediainfo: Toggle::ON,
            },
            default_video_stage: VideoStage {
                face_detection: Toggle::ON,
                technical_cue_detection: Toggle::ON,
                shot_detection: Toggle::ON,
                celebrity_recognition: Toggle::ON,
                label_detection: Toggle::ON,
                mediaconvert: Toggle::ON,
                content_moderation: Toggle::ON,
                face_search: FaceSearchOperator {
                    enabled: false,
                    collection_id: UNDEFINED.to_string(),
                },
                text_detection: Toggle::ON,
                generic_data_lookup: DataLookupOperator {
                    enabled: false,
                    bucket: DATAPLANE_BUCKET.to_string(),
                    key: UNDEFINED.to_string(),
                },
            },
            default_audio_stage: AudioStage {
                transcribe: TranscribeOperator {
                    enabled: true,
                    transcribe_language: TRANSCRIBE_LANGUAGE.to_string(),
                },
            },
            default_text_stage: TextStage {
                translate: TranslateOperator {
                    enabled: false,
                    source_language_code: TRANSLATE_SOURCE_LANGUAGE.to_string(),
                    target_language_code: TRANSLATE_TARGET_LANGUAGE.to_string(),
                },
                comprehend_entities: Toggle::ON,
                comprehend_key_phrases: Toggle::ON,
            },
            default_text_synthesis_stage: TextSynthesisStage { polly: Toggle::OFF },
        },
        input: WorkflowInput {
            media: MediaInput {
                video: S3Location {
                    s3_bucket: bucket.to_string(),
                    s3_key: key.to_string(),
                },
            },
        },
    }
}
