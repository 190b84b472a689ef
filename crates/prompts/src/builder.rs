//! Per-feature prompt assembly.

use shepherd_core::error::{Error, Result};
use shepherd_core::request::{EventKind, FeatureRequest, SermonStyle};
use shepherd_core::scripture::{ScriptureResultItem, search_response_schema};
use shepherd_core::provider::ResponseFormat;

/// How many passages one search page asks for.
const SEARCH_BATCH_SIZE: usize = 5;

const SERMON_INSTRUCTION: &str = "당신은 대한예수교장로회(통합) 교단의 목회자를 돕는 AI 목회 비서입니다. 당신의 임무는 약 30-35분 분량의, 청중에게 깊은 감동과 신학적 통찰을 주는 설교문 전체를 작성하는 것입니다. 설교문은 존중과 격려의 어조를 사용하며, 신학적으로 매우 건전해야 합니다. 응답은 **굵은 글씨**, 제목(##), 소제목(###), 목록(*) 등 마크다운을 사용하여 가독성 높게 구성해주세요. 반드시 ## 서론, ## 본론 (여러 대지로 구성), ## 결론의 명확한 구조를 따라야 합니다. 본론에서는 성경 본문에 대한 깊이 있는 주해와 함께, 성도들이 삶에 적용할 수 있는 구체적인 예시와 실천적 도전을 포함해주세요.";

const PRAYER_INSTRUCTION: &str = "당신은 목회자를 위한 기도문 작성 AI 비서입니다. 기도의 어조는 경건하고, 진심이 담겨있어야 하며, 성경적 가르침에 기반해야 합니다. 응답은 **굵은 글씨** 등 마크다운을 사용하여 가독성을 높여주세요.";

const SEARCH_INSTRUCTION: &str = "당신은 성경 전문가 AI 비서입니다. 사용자의 요청(특정 구절, 주제, 단어)에 가장 관련성 높은 성경 구절들을 찾아 목록으로 제공합니다. 각 항목에는 정확한 성경 출처(책, 장, 절), 구절 전체 텍스트, 그리고 해당 구절의 의미에 대한 간결한 요약 또는 현대적 적용점이 포함되어야 합니다. 응답은 반드시 지정된 JSON 스키마를 따라야 합니다.";

const BULLETIN_INSTRUCTION: &str = "당신은 교회 행정 및 소식을 담당하는 AI 비서입니다. 당신의 글쓰기 스타일은 명확하고, 간결하며, 따뜻하고 환영하는 분위기여야 합니다. 응답은 **굵은 글씨**, 제목(##), 목록(*) 등 마크다운을 사용하여 가독성 높게 구성해주세요.";

const MESSAGE_INSTRUCTION: &str = "당신은 목회자가 성도에게 보낼 짧고 개인적인 메시지를 작성하는 AI 비서입니다. 메시지는 따뜻하고, 진심이 담겨 있으며, 개인적인 느낌을 주어야 합니다. 간결하게 작성하여 SMS 문자로 보내기에 적합하도록 해주세요.";

/// A built prompt, ready for the generation client.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_prompt: String,
    pub response: ResponseFormat,
}

/// Build the prompt for one feature request.
///
/// Pure and total, except that an unrecognized event kind fails with
/// [`Error::InvalidArgument`].
pub fn build(request: &FeatureRequest) -> Result<Prompt> {
    match request {
        FeatureRequest::Sermon {
            topic,
            scripture,
            notes,
            styles,
        } => Ok(Prompt {
            system_instruction: SERMON_INSTRUCTION.into(),
            user_prompt: sermon_prompt(topic, scripture, notes, styles),
            response: ResponseFormat::Text,
        }),

        FeatureRequest::Prayer { situation, details } => Ok(Prompt {
            system_instruction: PRAYER_INSTRUCTION.into(),
            user_prompt: format!(
                "\n다음 상황을 위한 대표 기도문을 작성해주세요:\n- 기도 상황: {situation}\n- 구체적인 내용 또는 기도 제목: {details}"
            ),
            response: ResponseFormat::Text,
        }),

        FeatureRequest::ScriptureSearch { query, exclude } => Ok(Prompt {
            system_instruction: SEARCH_INSTRUCTION.into(),
            user_prompt: search_prompt(query, exclude),
            response: ResponseFormat::Json {
                schema: search_response_schema(),
            },
        }),

        FeatureRequest::Bulletin {
            content_type,
            topic,
            info,
        } => Ok(Prompt {
            system_instruction: BULLETIN_INSTRUCTION.into(),
            user_prompt: format!(
                "\n교회 주보 또는 공지사항에 사용할 '{content_type}' 초안을 작성해주세요.\n- 주제 또는 행사명: {topic}\n- 포함될 주요 정보 (날짜, 시간, 장소 등): {info}\n\n위 정보를 바탕으로 매력적이고 정보가 명확한 글을 작성해주세요."
            ),
            response: ResponseFormat::Text,
        }),

        FeatureRequest::PersonalMessage {
            message_type,
            situation,
        } => Ok(Prompt {
            system_instruction: MESSAGE_INSTRUCTION.into(),
            user_prompt: format!(
                "\n다음 대상과 상황에 맞는 '{message_type}' 문자 메시지 초안을 작성해주세요:\n- 대상 및 상황: {situation}"
            ),
            response: ResponseFormat::Text,
        }),

        FeatureRequest::Event {
            kind,
            names,
            details,
            scripture,
        } => {
            let kind: EventKind = kind
                .parse()
                .map_err(Error::InvalidArgument)?;
            Ok(Prompt {
                system_instruction: event_instruction(kind).into(),
                user_prompt: event_prompt(kind, names, details, scripture),
                response: ResponseFormat::Text,
            })
        }
    }
}

fn sermon_prompt(topic: &str, scripture: &str, notes: &str, styles: &[SermonStyle]) -> String {
    let style_list = if styles.is_empty() {
        "기본 스타일".to_string()
    } else {
        styles
            .iter()
            .map(|s| format!("- {}", s.label()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "\n설교 주제: {topic}\n성경 본문: {scripture}\n핵심 메시지 및 메모: {notes}\n요청된 설교 스타일: {style_list}\n\n위 내용을 바탕으로, 서론-본론-결론의 구조를 갖춘 감동적이고 짜임새 있는 30분 분량의 설교문을 작성해주십시오."
    )
}

/// Build the search prompt, rewriting it for follow-up pages so the model
/// is told to exclude every reference already on screen.
fn search_prompt(query: &str, exclude: &[ScriptureResultItem]) -> String {
    if exclude.is_empty() {
        return format!(
            "검색어: \"{query}\"\n\n이 검색어와 관련된 성경 구절을 {SEARCH_BATCH_SIZE}개 찾아주세요."
        );
    }

    let existing_refs = exclude
        .iter()
        .map(|item| item.reference.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "이전 검색어 \"{query}\"에 대한 추가 검색 요청입니다.\n\n이미 찾은 다음 구절들({existing_refs})은 **반드시 제외**하고, 관련성이 높은 **새로운** 성경 구절을 {SEARCH_BATCH_SIZE}개 더 찾아서 제시해주세요."
    )
}

fn event_instruction(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Wedding => "당신은 결혼을 앞둔 커플을 축복하는 주례자/목사입니다. 따뜻하고 희망적인 어조로, 성경적 원리에 기반한 결혼 생활의 지혜를 전달하는 설교/주례사를 작성합니다.",
        EventKind::Funeral => "당신은 유가족을 위로하고 고인의 삶을 기리는 목사입니다. 경건하고 차분한 어조로, 천국 소망과 부활 신앙에 기반한 위로의 메시지를 담은 장례예배 설교/추모사를 작성합니다.",
        EventKind::Newborn => "당신은 새 생명의 탄생을 축하하는 목사입니다. 기쁨과 사랑이 넘치는 어조로, 아기와 가정을 위한 축복의 메시지를 작성합니다.",
        EventKind::Graduation => "당신은 학생의 새로운 시작을 격려하고 축복하는 목사/멘토입니다. 희망차고 격려하는 어조로, 믿음 안에서 꿈을 펼쳐나갈 것을 응원하는 메시지를 작성합니다.",
    }
}

fn event_prompt(kind: EventKind, names: &str, details: &str, scripture: &str) -> String {
    let bible = if scripture.trim().is_empty() {
        "지정되지 않음"
    } else {
        scripture
    };

    format!(
        "\n- 행사: {}\n- 대상: {names}\n- 관련 정보: {details}\n- 참고 성경 구절: {bible}\n위 정보를 바탕으로, 행사의 목적에 맞는 감동적인 글을 작성해주세요.",
        kind.ceremony_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(reference: &str) -> ScriptureResultItem {
        ScriptureResultItem {
            reference: reference.into(),
            verse: "본문".into(),
            summary: "요약".into(),
        }
    }

    #[test]
    fn every_variant_builds_non_empty_prompts() {
        let requests = vec![
            FeatureRequest::Sermon {
                topic: "믿음의 능력".into(),
                scripture: "히브리서 11:1-6".into(),
                notes: String::new(),
                styles: vec![],
            },
            FeatureRequest::Prayer {
                situation: "주일 낮예배 대표기도".into(),
                details: "나라와 민족".into(),
            },
            FeatureRequest::ScriptureSearch {
                query: "용서".into(),
                exclude: vec![],
            },
            FeatureRequest::Bulletin {
                content_type: "주간 광고".into(),
                topic: "전교인 가을 수련회".into(),
                info: "10월 둘째 주".into(),
            },
            FeatureRequest::PersonalMessage {
                message_type: "위로/격려".into(),
                situation: "수술 후 회복 중".into(),
            },
            FeatureRequest::Event {
                kind: "wedding".into(),
                names: "김철수 군과 이영희 양".into(),
                details: String::new(),
                scripture: String::new(),
            },
        ];

        for request in requests {
            let prompt = build(&request).unwrap();
            assert!(!prompt.system_instruction.trim().is_empty());
            assert!(!prompt.user_prompt.trim().is_empty());
        }
    }

    #[test]
    fn unknown_event_kind_is_invalid_argument() {
        let request = FeatureRequest::Event {
            kind: "picnic".into(),
            names: "아무개".into(),
            details: String::new(),
            scripture: String::new(),
        };
        match build(&request) {
            Err(Error::InvalidArgument(msg)) => assert!(msg.contains("picnic")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn sermon_styles_listed_in_prompt() {
        let request = FeatureRequest::Sermon {
            topic: "감사".into(),
            scripture: "시편 100편".into(),
            notes: String::new(),
            styles: vec![SermonStyle::Practical, SermonStyle::YouthFocus],
        };
        let prompt = build(&request).unwrap();
        assert!(prompt.user_prompt.contains("생활 속 실천 강조"));
        assert!(prompt.user_prompt.contains("청년 대상 설교"));
        assert!(!prompt.user_prompt.contains("기본 스타일"));
    }

    #[test]
    fn sermon_without_styles_uses_default_label() {
        let request = FeatureRequest::Sermon {
            topic: "감사".into(),
            scripture: "시편 100편".into(),
            notes: String::new(),
            styles: vec![],
        };
        let prompt = build(&request).unwrap();
        assert!(prompt.user_prompt.contains("기본 스타일"));
    }

    #[test]
    fn first_search_page_requests_fixed_batch() {
        let request = FeatureRequest::ScriptureSearch {
            query: "사랑은 오래 참고".into(),
            exclude: vec![],
        };
        let prompt = build(&request).unwrap();
        assert!(prompt.user_prompt.contains("5개"));
        assert!(prompt.response.is_structured());
    }

    #[test]
    fn follow_up_search_excludes_seen_references() {
        let request = FeatureRequest::ScriptureSearch {
            query: "용서".into(),
            exclude: vec![item("마태복음 18:21"), item("누가복음 23:34")],
        };
        let prompt = build(&request).unwrap();
        assert!(prompt.user_prompt.contains("마태복음 18:21, 누가복음 23:34"));
        assert!(prompt.user_prompt.contains("반드시 제외"));
        assert!(prompt.user_prompt.contains("새로운"));
    }

    #[test]
    fn event_prompt_fills_blank_scripture() {
        let request = FeatureRequest::Event {
            kind: "funeral".into(),
            names: "故 홍길동 성도".into(),
            details: "고인의 신앙".into(),
            scripture: "  ".into(),
        };
        let prompt = build(&request).unwrap();
        assert!(prompt.user_prompt.contains("지정되지 않음"));
        assert!(prompt.system_instruction.contains("유가족"));
    }
}
