//! Feature request domain types.
//!
//! A `FeatureRequest` captures one form submission for one ministry task.
//! It is immutable once built and consumed exactly once by the prompt
//! builder and generation client.

use serde::{Deserialize, Serialize};

use crate::scripture::ScriptureResultItem;

/// One content-generation request, one variant per supported ministry task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "feature", rename_all = "snake_case")]
pub enum FeatureRequest {
    /// A full sermon manuscript.
    Sermon {
        topic: String,
        scripture: String,
        notes: String,
        styles: Vec<SermonStyle>,
    },

    /// A representative prayer for a given situation.
    Prayer { situation: String, details: String },

    /// A scripture passage search returning structured results.
    ///
    /// `exclude` carries the already-accumulated results so follow-up
    /// pages can instruct the model to return only new passages.
    ScriptureSearch {
        query: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        exclude: Vec<ScriptureResultItem>,
    },

    /// Bulletin or announcement copy.
    Bulletin {
        content_type: String,
        topic: String,
        info: String,
    },

    /// A short personal message suitable for SMS.
    PersonalMessage {
        message_type: String,
        situation: String,
    },

    /// Ceremony content (wedding, funeral, newborn blessing, graduation).
    ///
    /// `kind` stays a free-form tag here; the prompt builder rejects
    /// unrecognized kinds with `Error::InvalidArgument`.
    Event {
        kind: String,
        names: String,
        details: String,
        scripture: String,
    },
}

impl FeatureRequest {
    /// Stable identifier used in export filenames and logs.
    pub fn feature_name(&self) -> &'static str {
        match self {
            Self::Sermon { .. } => "sermon",
            Self::Prayer { .. } => "prayer",
            Self::ScriptureSearch { .. } => "scripture_search",
            Self::Bulletin { .. } => "bulletin",
            Self::PersonalMessage { .. } => "message",
            Self::Event { .. } => "event",
        }
    }
}

/// Sermon style emphases a pastor can combine on the sermon form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SermonStyle {
    BiblicalHumor,
    GeneralHumor,
    Expository,
    Practical,
    YouthFocus,
    ChildrenFocus,
    NewcomerFocus,
    TestimonyFocus,
    QaFormat,
    ParableFocus,
    PropheticFocus,
    ExegeticalFocus,
    TopicalFocus,
    TheologicalDepth,
}

impl SermonStyle {
    /// All styles, in form display order.
    pub const ALL: [SermonStyle; 14] = [
        Self::BiblicalHumor,
        Self::GeneralHumor,
        Self::Expository,
        Self::Practical,
        Self::YouthFocus,
        Self::ChildrenFocus,
        Self::NewcomerFocus,
        Self::TestimonyFocus,
        Self::QaFormat,
        Self::ParableFocus,
        Self::PropheticFocus,
        Self::ExegeticalFocus,
        Self::TopicalFocus,
        Self::TheologicalDepth,
    ];

    /// The label inserted into the sermon prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BiblicalHumor => "성경 유머 추천",
            Self::GeneralHumor => "설교 유머 추천",
            Self::Expository => "성경 강독 강조",
            Self::Practical => "생활 속 실천 강조",
            Self::YouthFocus => "청년 대상 설교",
            Self::ChildrenFocus => "어린이/유아 설교",
            Self::NewcomerFocus => "새신자 환영 설교",
            Self::TestimonyFocus => "간증/경험 중심",
            Self::QaFormat => "질문과 답변 형식",
            Self::ParableFocus => "비유/이야기 중심",
            Self::PropheticFocus => "도전적/예언자적 강조",
            Self::ExegeticalFocus => "주해 설교 강조",
            Self::TopicalFocus => "주제 설교 강조",
            Self::TheologicalDepth => "신학적 깊이 강조",
        }
    }

    /// The CLI-facing key for this style.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BiblicalHumor => "biblical-humor",
            Self::GeneralHumor => "general-humor",
            Self::Expository => "expository",
            Self::Practical => "practical",
            Self::YouthFocus => "youth",
            Self::ChildrenFocus => "children",
            Self::NewcomerFocus => "newcomer",
            Self::TestimonyFocus => "testimony",
            Self::QaFormat => "qa",
            Self::ParableFocus => "parable",
            Self::PropheticFocus => "prophetic",
            Self::ExegeticalFocus => "exegetical",
            Self::TopicalFocus => "topical",
            Self::TheologicalDepth => "theological",
        }
    }
}

impl std::str::FromStr for SermonStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|style| style.key() == s)
            .copied()
            .ok_or_else(|| format!("unknown sermon style: {s}"))
    }
}

/// Recognized ceremony kinds for the event feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Wedding,
    Funeral,
    Newborn,
    Graduation,
}

impl EventKind {
    /// The ceremony label used inside the prompt body.
    pub fn ceremony_label(&self) -> &'static str {
        match self {
            Self::Wedding => "결혼예배 설교/주례사",
            Self::Funeral => "장례예배 설교/추모사",
            Self::Newborn => "출산/백일 축사 또는 기도문",
            Self::Graduation => "입학/졸업 격려사",
        }
    }

    /// The CLI-facing key for this kind.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Wedding => "wedding",
            Self::Funeral => "funeral",
            Self::Newborn => "newborn",
            Self::Graduation => "graduation",
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "wedding" => Ok(Self::Wedding),
            "funeral" => Ok(Self::Funeral),
            "newborn" => Ok(Self::Newborn),
            "graduation" => Ok(Self::Graduation),
            other => Err(format!("unknown event kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_names_are_stable() {
        let req = FeatureRequest::Prayer {
            situation: "주일 낮예배 대표기도".into(),
            details: String::new(),
        };
        assert_eq!(req.feature_name(), "prayer");
    }

    #[test]
    fn sermon_style_roundtrip_via_key() {
        for style in SermonStyle::ALL {
            let parsed: SermonStyle = style.key().parse().unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn unknown_sermon_style_rejected() {
        assert!("interpretive-dance".parse::<SermonStyle>().is_err());
    }

    #[test]
    fn event_kind_parsing() {
        assert_eq!("wedding".parse::<EventKind>().unwrap(), EventKind::Wedding);
        assert!("picnic".parse::<EventKind>().is_err());
    }

    #[test]
    fn request_serialization_tags_feature() {
        let req = FeatureRequest::Bulletin {
            content_type: "주간 광고".into(),
            topic: "전교인 가을 수련회".into(),
            info: "10월 둘째 주 토요일".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""feature":"bulletin""#));
    }
}
