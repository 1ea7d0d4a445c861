//! Prompt Builder
//!
//! Assembles the instruction sent to the generation API.

/// Builds the story prompt for `keywords`, optionally naming the main
/// character and giving their age.
pub fn build_prompt(keywords: &[String], name: Option<&str>, age: Option<u8>) -> String {
    let mut prompt = format!(
        "Write a short story using the following keywords: {}.",
        keywords.join(", ")
    );

    if let Some(name) = name {
        prompt.push_str(&format!(" The main character's name is {name}."));
    }
    if let Some(age) = age {
        prompt.push_str(&format!(" The main character is {age} years old."));
    }

    prompt.push_str(
        " The story should be between 150-200 words. \
         Make it engaging and suitable for young readers. \
         The story should have a clear beginning, middle, and end.",
    );
    prompt
}
