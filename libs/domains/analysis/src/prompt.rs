//! Fixed prompt and sampling parameters for code analysis.

/// System message sent with every analysis request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that analyzes code and provides suggestions for optimization, explanation, identifying bugs, and security vulnerabilities. Focus on common security issues like injection flaws, broken authentication, sensitive data exposure, XML External Entities (XXE), broken access control, security misconfigurations, cross-site scripting (XSS), insecure deserialization, and insufficient logging & monitoring. Additionally, analyze the code for adherence to general compliance principles such as data privacy (GDPR), security controls (SOC2), and information security management (ISO27001), looking for aspects like proper data handling, access controls, logging, and secure coding practices. Your response MUST be a JSON object with the following keys: 'analysis' (string), 'optimized_code' (string), and 'explanation' (string).";

/// Canned guidance returned when the submitted code is empty or whitespace.
/// This is a successful response, not an error.
pub const EMPTY_CODE_GUIDANCE: &str = "It seems like you haven't provided the code yet. Please paste the code you'd like me to analyze, and I'll do my best to:\n\n1. Explain how the code works\n2. Identify potential bugs or areas for improvement\n3. Suggest optimizations to make the code more efficient, readable, or maintainable\n\nPlease paste the code, and I'll get started!";

pub const MAX_TOKENS: u32 = 200;
pub const TEMPERATURE: f32 = 0.2;

/// Build the user message embedding the raw code in a fenced block.
pub fn user_prompt(code: &str) -> String {
    format!(
        "Analyze the following code for optimization, explanation, potential bugs, and security vulnerabilities:\n\n```\n{}\n```",
        code
    )
}
