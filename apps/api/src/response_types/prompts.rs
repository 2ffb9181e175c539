// Formatting instruction blocks, one per response type.
// Spliced verbatim into the answer-generation prompt by the caller.

/// Returned for any name that is not a registered response type.
pub const DEFAULT_INSTRUCTIONS: &str =
    "Provide a clear, concise response in an appropriate format.";

pub const MULTIPLE_PARAGRAPHS: &str = "\
- Structure your response in multiple paragraphs with clear topic sentences
- Use 3-5 paragraphs to cover different aspects of the answer
- Include transitions between paragraphs for smooth flow
- Keep paragraphs focused on a single main idea
- Use markdown formatting for emphasis where appropriate
- Keep the total length under 1000 words";

pub const SINGLE_PARAGRAPH: &str = "\
- Provide a concise, comprehensive answer in a single paragraph
- Include the most important information only
- Use clear, direct language
- Keep the total length under 300 words";

pub const BULLET_POINTS: &str = "\
- Structure your response as a list of bullet points
- Use 5-10 bullet points to cover key information
- Start each bullet with a clear, informative phrase
- Keep bullet points concise (1-2 sentences each)
- Use sub-bullets for supporting details if needed
- Use markdown bullet point formatting";

pub const TABLE_FORMAT: &str = "\
- Present information in a markdown table format
- Include a header row with clear column names
- Organize data logically with appropriate columns
- Use 3-7 columns depending on the data complexity
- Include 5-10 rows of relevant information
- Align numeric data to the right, text to the left
- Add a brief explanation before the table if needed";

pub const STEP_BY_STEP_GUIDE: &str = "\
- Structure as a sequential guide with numbered steps
- Include 5-10 steps to complete the process or understand the concept
- Start with an introduction explaining the goal
- Make each step clear, actionable, and self-contained
- Use imperative language for instructions
- Include a brief explanation with each step if needed
- Add a conclusion summarizing the process
- Use markdown formatting for step numbers";

pub const SHORT_REPORT: &str = r#"- Structure as a brief professional report with 3 sections
- Include a "Summary" section (1-2 paragraphs)
- Include a "Key Findings" section (2-3 paragraphs or 3-5 bullet points)
- Include a "Conclusion" section (1 paragraph)
- Keep the total length under 1500 words
- Use markdown headings for each section"#;

pub const DETAILED_REPORT: &str = r#"- Structure as a comprehensive formal report with 5+ sections
- Include an "Executive Summary" (1-2 paragraphs)
- Include "Background/Context" section
- Include "Analysis" section with subsections as needed
- Include "Findings" section with detailed evidence
- Include "Knowledge Gap" section with discussion of gaps in knowledge
- Include "Recommendations" or "Conclusions" section
- Use proper markdown formatting with hierarchical headings
- Include relevant details from all provided sources
- Keep the total length under 3000 words
- Add a "References" section citing all sources used"#;

pub const TECHNICAL_DOCUMENTATION: &str = r#"- Structure as technical documentation with clear sections
- Begin with a "Purpose" section explaining the topic
- Include "Technical Details" section with precise information
- Add "Implementation" section with examples if applicable
- Include "Notes" or "Considerations" section for edge cases
- Use code blocks with appropriate syntax highlighting if relevant
- Use technical terminology appropriate to the domain"#;

pub const FAQ_FORMAT: &str = "\
- Structure as a series of questions and answers
- Begin with a brief introduction to the topic
- Format each Q&A pair with the question in bold
- Provide concise but complete answers to each question
- Cover 5-8 most relevant questions based on the query
- Organize questions in logical order of importance";

pub const COMPARATIVE_ANALYSIS: &str = r#"- Structure as a comparison between multiple items, concepts, or approaches
- Begin with an introduction explaining the comparison criteria
- Include a section for each item being compared
- Use a consistent structure for each comparison section
- Include a "Similarities" section highlighting common features
- Include a "Differences" section highlighting distinguishing features
- End with a "Recommendation" or "Conclusion" section
- Use tables or bullet points for direct comparisons where appropriate
- Keep analysis balanced and objective"#;
