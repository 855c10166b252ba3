//! Keyword skill extraction for job-board postings, which carry no structured skills.
//!
//! Purely lexical: a catalog skill is found when its lower-cased label occurs
//! anywhere in the lower-cased text. Short labels ("R", "Go", "AI") match
//! inside longer words; that is accepted, same as the matcher's policy.

/// Upper bound on skills attached to one posting.
pub const MAX_EXTRACTED_SKILLS: usize = 10;

const SKILL_CATALOG: &[&str] = &[
    // Programming languages
    "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust", "Ruby", "PHP",
    "Scala", "Kotlin", "Swift",
    // ML / AI
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Keras", "Scikit-learn",
    "NLP", "Computer Vision", "Neural Networks", "AI", "Artificial Intelligence", "LLM", "GPT",
    "Transformers", "BERT", "OpenAI",
    // Data science
    "Data Science", "Pandas", "NumPy", "Data Analysis", "Statistics", "R", "Jupyter",
    "Data Visualization",
    // Web / full stack
    "React", "Vue", "Angular", "Node.js", "Express", "Django", "Flask", "FastAPI",
    "Spring Boot", "HTML", "CSS", "Tailwind", "Next.js", "GraphQL", "REST API", "MongoDB",
    "PostgreSQL", "MySQL", "Redis",
    // Cloud & DevOps
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD", "Linux", "Git", "Terraform",
    "Jenkins",
    // Other
    "SQL", "NoSQL", "Microservices", "Agile", "Scrum", "API Development", "Unit Testing",
];

/// Returns catalog skills found in `text`, in catalog order, at most `MAX_EXTRACTED_SKILLS`.
pub fn extract_skills_from_text(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for &skill in SKILL_CATALOG {
        if found.len() == MAX_EXTRACTED_SKILLS {
            break;
        }
        if lower.contains(&skill.to_lowercase()) && !found.iter().any(|f| f == skill) {
            found.push(skill.to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_skills_case_insensitively_in_catalog_order() {
        let skills = extract_skills_from_text("We need KUBERNETES and docker; python a plus");
        assert_eq!(skills, vec!["Python", "R", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_no_skills_in_plain_text() {
        assert!(extract_skills_from_text("Nice team and cozy desks.").is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_skills_from_text("").is_empty());
    }

    #[test]
    fn test_substring_hits_are_lexical() {
        // "javascript" contains both "java" and "r".
        let skills = extract_skills_from_text("javascript");
        assert_eq!(skills, vec!["JavaScript", "Java", "R"]);
    }

    #[test]
    fn test_result_is_capped() {
        let text = SKILL_CATALOG.join(" ");
        let skills = extract_skills_from_text(&text);
        assert_eq!(skills.len(), MAX_EXTRACTED_SKILLS);
        assert_eq!(skills[0], "Python");
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        for (i, a) in SKILL_CATALOG.iter().enumerate() {
            assert!(
                !SKILL_CATALOG[i + 1..].contains(a),
                "duplicate catalog entry {a}"
            );
        }
    }
}
