// All LLM prompt constants for the assessment pipeline.
// The prompt builder is a pure function: identical inputs produce identical
// payloads. Sampling constants (model, temperature, token budget) live in
// `llm_client` next to the wire format.

use crate::assessment::format::QaPair;

/// System prompt — career counselor persona with a JSON-only directive.
pub const COUNSELOR_SYSTEM: &str = "You are an expert career counselor with deep knowledge \
    of various professions, required skills, and career paths. Provide detailed, accurate, \
    and practical career recommendations based on user assessment answers. \
    Always respond with valid JSON.";

/// Static domain-context block enumerating the career taxonomy the model
/// should recommend from. Mirrors the eight interest categories in the
/// question catalog.
const CAREER_CONTEXT: &str = r#"Career Context:
1. Technology and Innovation:
   - Software Development: Creating applications and systems
   - Data Science: Analyzing and interpreting complex data
   - Cybersecurity: Protecting digital systems and data
   - AI/ML Engineering: Developing intelligent systems
   - Cloud Computing: Managing and deploying cloud services

2. Business and Finance:
   - Financial Analysis: Evaluating investments and markets
   - Business Consulting: Advising companies on strategy
   - Project Management: Leading and organizing projects
   - Marketing: Promoting products and services
   - Entrepreneurship: Starting and managing businesses

3. Healthcare and Medicine:
   - Medical Practice: Diagnosing and treating patients
   - Nursing: Providing patient care and support
   - Medical Research: Conducting health studies
   - Healthcare Administration: Managing medical facilities
   - Public Health: Improving community health

4. Arts and Creativity:
   - Graphic Design: Creating visual content
   - Writing/Editing: Producing written content
   - Music/Performing Arts: Entertaining and creating art
   - Architecture: Designing buildings and spaces
   - Film/Media Production: Creating visual media

5. Science and Research:
   - Scientific Research: Conducting experiments
   - Environmental Science: Studying ecosystems
   - Physics/Chemistry: Exploring natural phenomena
   - Biology: Studying living organisms
   - Astronomy: Exploring space

6. Education and Training:
   - Teaching: Educating students
   - Educational Administration: Managing schools
   - Curriculum Development: Creating educational content
   - Training: Developing professional skills
   - Educational Technology: Implementing tech in education

7. Social Services:
   - Social Work: Supporting individuals and communities
   - Counseling: Providing mental health support
   - Non-profit Management: Leading charitable organizations
   - Community Development: Improving neighborhoods
   - Human Services: Assisting vulnerable populations

8. Engineering and Construction:
   - Civil Engineering: Designing infrastructure
   - Mechanical Engineering: Creating mechanical systems
   - Electrical Engineering: Working with electrical systems
   - Construction Management: Overseeing building projects
   - Architecture: Designing structures"#;

/// Instruction body plus the literal JSON shape the model must conform to.
/// The validator enforces `analysis` and `careers`; the trailing
/// `recommendations` block is advisory output the pipeline ignores.
const RESPONSE_DIRECTIVE: &str = r#"Please provide:
1. A comprehensive analysis of the user's profile based on their answers, focusing on:
   - Their primary interests and skills
   - Work environment preferences
   - Educational aspirations
   - Schedule preferences
   - Potential career paths that align with their profile

2. 3-5 career recommendations that match their interests, skills, and preferences, including for each:
   - Career title and industry
   - Detailed description of the role
   - Required skills and qualifications
   - Typical salary range (entry to senior level)
   - Career growth opportunities and progression paths
   - Why this career matches their profile
   - Specific next steps to pursue this career
   - Potential challenges and how to overcome them
   - Related career options to consider

3. Additional recommendations:
   - Skills to develop
   - Certifications or courses to consider
   - Networking opportunities
   - Professional organizations to join
   - Resources for further exploration

Format your response as a JSON object with this structure:
{
  "analysis": "Detailed analysis of the user's profile, interests, and potential career paths",
  "careers": [
    {
      "title": "Career Title",
      "industry": "Industry Sector",
      "description": "Detailed description of the career",
      "skills": ["Required skill 1", "Required skill 2"],
      "qualifications": ["Required qualification 1", "Required qualification 2"],
      "salaryRange": {
        "entry": "Entry level salary range",
        "mid": "Mid-career salary range",
        "senior": "Senior level salary range"
      },
      "growth": "Career growth opportunities and progression paths",
      "matchReason": "Why this career matches their profile",
      "nextSteps": ["Step 1", "Step 2", "Step 3"],
      "challenges": "Potential challenges and solutions",
      "relatedCareers": ["Related career 1", "Related career 2"]
    }
  ],
  "recommendations": {
    "skills": ["Skill 1 to develop", "Skill 2 to develop"],
    "certifications": ["Certification 1", "Certification 2"],
    "networking": "Networking opportunities and strategies",
    "organizations": ["Organization 1", "Organization 2"],
    "resources": ["Resource 1", "Resource 2"]
  }
}"#;

/// Composes the user message: Q/A transcript, career taxonomy, and the
/// output-shape directive.
pub fn build_assessment_prompt(answers: &[QaPair]) -> String {
    let transcript = answers
        .iter()
        .map(|qa| format!("Q: {}\nA: {}", qa.question, qa.answer))
        .collect::<Vec<String>>()
        .join("\n\n");

    format!(
        "You are an expert career counselor with deep knowledge of various professions, \
         required skills, and career paths. Analyze the following assessment answers and \
         provide detailed career recommendations.\n\n\
         Assessment Answers:\n{transcript}\n\n{CAREER_CONTEXT}\n\n{RESPONSE_DIRECTIVE}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairs() -> Vec<QaPair> {
        vec![
            QaPair {
                question: "What are your main interests?".to_string(),
                answer: "Technology and Innovation, Science and Research".to_string(),
            },
            QaPair {
                question: "What type of work environment do you prefer?".to_string(),
                answer: "Remote work".to_string(),
            },
        ]
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let pairs = sample_pairs();
        assert_eq!(build_assessment_prompt(&pairs), build_assessment_prompt(&pairs));
    }

    #[test]
    fn test_prompt_embeds_transcript_in_order() {
        let prompt = build_assessment_prompt(&sample_pairs());
        let interests = prompt
            .find("Q: What are your main interests?")
            .expect("first question missing");
        let environment = prompt
            .find("Q: What type of work environment do you prefer?")
            .expect("second question missing");
        assert!(interests < environment);
        assert!(prompt.contains("A: Remote work"));
    }

    #[test]
    fn test_prompt_carries_count_instruction_and_shape() {
        let prompt = build_assessment_prompt(&sample_pairs());
        assert!(prompt.contains("3-5 career recommendations"));
        assert!(prompt.contains("\"salaryRange\""));
        assert!(prompt.contains("\"relatedCareers\""));
        assert!(prompt.contains("Career Context:"));
    }
}
