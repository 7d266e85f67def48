// All LLM prompt constants for roadmap generation.

/// Advisor persona. Combined with `JSON_ONLY_INSTRUCTION` to form the system instruction.
pub const ADVISOR_PERSONA: &str = "You are a world-class technical career advisor. \
    You provide structured, actionable, and highly technical career advice.";

/// Roadmap prompt template. Replace `{interest}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are advising a student on a career in the technical interest area they name.
Their specific area of interest is: "{interest}".

Generate a comprehensive skill roadmap for this interest.

RULES:
1. Include a mix of foundational, core, and advanced skills spanning every one of these categories: Programming & Software, Hardware & Electronics, Math & Theory, AI & Machine Learning.
2. Add Soft Skills & Management entries where they are relevant to the interest.
3. Be specific: instead of "Programming", say "C++ for Embedded Systems" or "Python for ML".
4. The "importance" field of EVERY skill must explain exactly why the skill helps with "{interest}", naming it explicitly.
5. Give every skill a short unique "id" and list concrete learning resources or search keywords in "resources"."#;
