//! Prompt assembly for Korean business-email reply generation.
//!
//! The system prompt pins the etiquette rules, the tone style guide, and the
//! three length-differentiated variants, and restricts output to a single
//! JSON object so the completion can be parsed without scraping.

/// The three reply labels, in the order the service returns them.
pub const REPLY_LABELS: [&str; 3] = ["짧은", "보통", "상세"];

/// Fallback tone for unrecognized values.
pub const DEFAULT_TONE: &str = "정중";

const TONE_GUIDES: [(&str, &str); 3] = [
    (
        "정중",
        "정중하고 공손한 톤. 존댓말과 경어를 충분히 사용하되 과하지 않게.",
    ),
    (
        "친근",
        "친근하면서도 프로페셔널한 톤. 부드럽고 편안하지만 비즈니스 예의는 지킨다.",
    ),
    (
        "격식",
        "매우 격식 있는 톤. 공문서 수준의 격식체를 사용하고, 한자어와 공식적 표현을 활용.",
    ),
];

/// Style guide for a tone. Unrecognized tones silently fall back to the
/// default guide; the UI only offers the three known tones, so a
/// hand-crafted request degrades gracefully instead of failing.
pub fn tone_guide(tone: &str) -> &'static str {
    TONE_GUIDES
        .iter()
        .find(|(name, _)| *name == tone)
        .or_else(|| TONE_GUIDES.iter().find(|(name, _)| *name == DEFAULT_TONE))
        .map(|(_, guide)| *guide)
        .unwrap_or("")
}

pub fn system_prompt(tone: &str) -> String {
    format!(
        r#"당신은 한국 비즈니스 이메일 전문 작성자입니다.

## 규칙
1. 한국 비즈니스 이메일 매너를 철저히 반영합니다.
2. 적절한 존칭과 경어를 사용합니다.
3. 상황에 맞는 인사말과 마무리말을 포함합니다.
4. CC/참조가 있는 경우 적절한 톤으로 조절합니다.
5. 원본 이메일의 맥락을 정확히 파악하고 적절히 응답합니다.
6. 톤 가이드: {guide}

## 출력 형식
정확히 3개의 답장 버전을 생성합니다:
- 짧은 버전: 핵심만 간결하게 (3-5문장)
- 보통 버전: 적절한 분량 (5-8문장)
- 상세 버전: 충분한 설명과 후속 조치 포함 (8-12문장)

반드시 아래 JSON 형식으로만 응답하세요. 다른 텍스트는 절대 포함하지 마세요:
{{"replies":[{{"label":"짧은","content":"..."}},{{"label":"보통","content":"..."}},{{"label":"상세","content":"..."}}]}}"#,
        guide = tone_guide(tone)
    )
}

/// User prompt: the received email, the optional key-message instruction, and
/// the closing request naming the tone. An absent key message contributes no
/// line at all rather than an empty instruction.
pub fn user_prompt(email: &str, tone: &str, key_message: Option<&str>) -> String {
    let key_message_line = key_message
        .map(|m| format!("답장에 포함할 핵심 메시지: {m}\n\n"))
        .unwrap_or_default();

    format!(
        "받은 이메일:\n{email}\n\n{key_message_line}위 이메일에 대한 {tone} 톤의 비즈니스 답장 3개 버전을 생성해주세요."
    )
}
