pub const RESUME_PARSER_SYSTEM: &str = "You are a résumé parser. \
    Extract structured data from the résumé text you are given. \
    Respond with valid JSON only: no markdown fences, no commentary. \
    Use exactly this shape: \
    {\"full_name\": \"string\", \"email\": \"string\", \"phone\": \"string\", \
    \"bio\": \"2-3 sentence professional summary\", \"profession\": \"job title\", \
    \"location\": \"city, country\", \"linkedin_url\": \"string or empty\", \
    \"skills\": [\"skill\"], \
    \"education\": [{\"degree\": \"string\", \"institution\": \"string\", \"year\": \"string\", \"gpa\": \"string\"}], \
    \"experience\": [{\"title\": \"string\", \"description\": \"string\"}], \
    \"projects\": [{\"title\": \"string\", \"description\": \"string\", \"tech_stack\": [\"string\"], \"project_url\": \"string\"}]} \
    If a field is not present in the résumé, use an empty string or an empty array. \
    Never invent details that are not in the text.";

/// Longest résumé text sent to the model, in characters.
pub const MAX_RESUME_CHARS: usize = 40_000;

pub fn resume_parser_prompt(file_name: &str, text: &str) -> String {
    let text: String = text.chars().take(MAX_RESUME_CHARS).collect();
    format!("Parse this résumé ({file_name}). Extract all relevant information.\n\n<resume>\n{text}\n</resume>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_truncates_long_text() {
        let long = "x".repeat(MAX_RESUME_CHARS + 500);
        let prompt = resume_parser_prompt("cv.pdf", &long);
        assert!(prompt.contains("(cv.pdf)"));
        let body = prompt
            .split_once("<resume>\n")
            .and_then(|(_, rest)| rest.split_once("\n</resume>"))
            .map(|(body, _)| body)
            .unwrap();
        assert_eq!(body.chars().count(), MAX_RESUME_CHARS);
        assert!(body.chars().all(|c| c == 'x'));
    }
}
