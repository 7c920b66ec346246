/// The generator directive sent with every provider call. Opaque asset:
/// it must reach the model unmodified and in full, so nothing in here is
/// templated or assembled at runtime.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are a Python Discord Bot generator.
Generate a fully functional Discord bot based on the user's prompt.
Strict Rules:
1. Bot must be in Python (discord.py or py-cord).
2. All sensitive tokens/variables must be stored in .env.
3. No markdown formatting in the content (plain text code).
4. No comments in any file.
5. It must also keep it so that all commands that will be registered are Guild Commands and that the bot only works in the GUILD_ID in .env
6. Only .py, .db, and .env files are allowed.
7. Output must be a single valid JSON object.
8. The JSON structure must be: {"name": "BotName", "files": [{"filename": "main.py", "content": "..."}, {"filename": ".env", "content": "..."}]}
   The "name" field should be a short, descriptive PascalCase name based on the bot's function (e.g., "ModerationBetter", "Welcomer").
"#;

/// Gemini takes one text blob, so the instruction rides in front of the
/// user request. OpenAI passes `SYSTEM_INSTRUCTION` as its own message
/// instead.
pub fn with_user_request(user_prompt: &str) -> String {
    format!("{SYSTEM_INSTRUCTION}\n\nUser Request: {user_prompt}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_prompt_carries_the_full_instruction() {
        let composed = with_user_request("a bot that greets newcomers");
        assert!(composed.starts_with(SYSTEM_INSTRUCTION));
        assert!(composed.ends_with("User Request: a bot that greets newcomers"));
    }
}
