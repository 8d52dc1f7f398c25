// Prompt constants for the counselor analysis.
// The system prompt lives in llm_client::prompts.

/// Analysis prompt template. Replace every `{placeholder}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"STUDENT PROFILE ANALYSIS REQUEST

Student Details:
- Academic Percentage: {percentage}%
- Stream: {stream}
- Category: {category}
- Education Level: {education_level}
- State Preference: {state}
- Family Income: {family_income}
- Age: {age}
- Gender: {gender}

ELIGIBLE COLLEGES FOUND ({college_count}):
{colleges}

ELIGIBLE SCHOLARSHIPS FOUND ({scholarship_count}):
{scholarships}

ANALYSIS REQUIREMENTS:
1. **Eligibility Assessment**: Analyze the student's profile comprehensively
2. **College Rankings**: Rank the top 5 colleges based on the student's profile, considering:
   - Academic fit (percentage vs requirements)
   - Career goals alignment
   - Financial feasibility
   - Location preferences
   - Admission probability
3. **Scholarship Prioritization**: Rank top 5 scholarships by:
   - Eligibility match
   - Award amount
   - Application difficulty
   - Success probability
4. **Strategic Recommendations**: Provide actionable advice on:
   - Application strategy
   - Areas for improvement
   - Timeline planning
   - Document preparation
5. **Alternative Suggestions**: If limited options, suggest ways to improve eligibility

RESPONSE FORMAT:
Provide a structured analysis with:
- Overall Assessment
- Top 5 College Recommendations (with reasons)
- Top 5 Scholarship Recommendations (with reasons)
- Strategic Action Plan
- Tips for Success

Keep the response informative, encouraging, and actionable."#;

/// Used when the analysis yields no action-plan lines.
pub const DEFAULT_ACTION_PLAN: [&str; 5] = [
    "1. Apply to multiple colleges to increase chances",
    "2. Prepare all required documents in advance",
    "3. Meet application deadlines",
    "4. Apply for multiple scholarships",
    "5. Consider backup options",
];

pub const AI_SUCCESS_TIPS: [&str; 5] = [
    "Start applications early to avoid last-minute rush",
    "Prepare a compelling personal statement",
    "Get strong letters of recommendation",
    "Keep all documents organized and ready",
    "Follow up on application status regularly",
];
