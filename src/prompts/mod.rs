// Prompt text sent to the completion endpoint. The topic is inserted
// verbatim; callers sanitize it before it reaches this module.

pub fn system_prompt(topic: &str, word_count: u32) -> String {
    format!(
        "You are a professional content writer. Create a well-structured, informative article \
         about '{topic}'. The article should be approximately {word_count} words and include an \
         engaging title, introduction, several body paragraphs with subheadings, and a \
         conclusion. Use a professional, informative tone and ensure the content is original \
         and engaging."
    )
}

pub fn user_prompt(topic: &str) -> String {
    format!("Write an article about: {topic}")
}
