use serde::Serialize;

/// Body sent to `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeminiPayload {
    Text(TextPayload),
    Speech(SpeechPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPayload {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechPayload {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    pub speech_config: SpeechConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

impl Content {
    fn single_text(text: String) -> Vec<Content> {
        vec![Content {
            parts: vec![Part { text }],
        }]
    }
}

impl GeminiPayload {
    pub fn text(prompt: &str) -> Self {
        Self::Text(TextPayload {
            contents: Content::single_text(prompt.to_string()),
        })
    }

    pub fn speech(prompt: &str, prefix: &str, voice_name: &str, model: &str) -> Self {
        Self::Speech(SpeechPayload {
            contents: Content::single_text(format!("{prefix}{prompt}")),
            generation_config: GenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice_name.to_string(),
                        },
                    },
                },
            },
            model: model.to_string(),
        })
    }
}
