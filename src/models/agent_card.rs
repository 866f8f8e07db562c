//! # Agent Card
//!
//! Discovery metadata served at `/.well-known/agent.json`. The skill list
//! depends on the deployment profile; the executor behind it is the same.

use serde::{Deserialize, Serialize};

use crate::config::DeploymentProfile;
use crate::constants::server::AGENT_VERSION;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    pub streaming: bool,
    pub push_notifications: bool,
    pub state_transition_history: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub examples: Vec<String>,
}

impl AgentSkill {
    fn new(id: &str, name: &str, description: &str, tags: &[&str], examples: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub url: String,
    pub version: String,
    pub default_input_modes: Vec<String>,
    pub default_output_modes: Vec<String>,
    pub capabilities: AgentCapabilities,
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    /// Build the card advertised by the given profile
    pub fn for_profile(profile: DeploymentProfile, port: u16) -> Self {
        let (name, description, skills) = match profile {
            DeploymentProfile::LangflowChat => (
                "Langflow Agent",
                "An A2A agent that processes messages using Langflow AI workflows",
                vec![langflow_chat_skill()],
            ),
            DeploymentProfile::SimpleAgent => (
                "Simple Agent",
                "A simple but powerful starter agent that can fetch content from URLs, \
                 perform arithmetic calculations, and provide general assistance. The agent \
                 intelligently decides which tool to use based on your request.",
                vec![
                    url_retrieval_skill(),
                    calculator_skill(),
                    general_assistant_skill(),
                ],
            ),
        };

        let modes = vec!["text".to_string(), "text/plain".to_string()];
        Self {
            name: name.to_string(),
            description: description.to_string(),
            url: format!("http://localhost:{port}/"),
            version: AGENT_VERSION.to_string(),
            default_input_modes: modes.clone(),
            default_output_modes: modes,
            capabilities: AgentCapabilities::default(),
            skills,
        }
    }
}

fn langflow_chat_skill() -> AgentSkill {
    AgentSkill::new(
        "langflow-chat",
        "Langflow Chat",
        "Process messages using Langflow AI workflows",
        &["chat", "langflow", "ai"],
        &[
            "Hello, how are you?",
            "What is the weather like?",
            "Tell me a joke",
        ],
    )
}

fn url_retrieval_skill() -> AgentSkill {
    AgentSkill::new(
        "url-content-retrieval",
        "URL Content Retrieval",
        "Fetch and retrieve data from URLs. Supports plain text, raw HTML, or JSON output \
         formats with cleaning options.",
        &["web", "url", "scraping", "data-retrieval"],
        &[
            "Get the content from https://example.com",
            "Fetch data from this URL: https://api.example.com/data",
            "What's on this webpage: https://news.example.com",
        ],
    )
}

fn calculator_skill() -> AgentSkill {
    AgentSkill::new(
        "arithmetic-calculator",
        "Arithmetic Calculator",
        "Perform basic arithmetic operations on mathematical expressions including addition, \
         subtraction, multiplication, division, and exponentiation.",
        &["math", "calculator", "arithmetic", "computation"],
        &[
            "Calculate 4*4*(33/22)+12-20",
            "What is 15 + 27 * 3?",
            "Solve: (100 - 25) / 5 + 10^2",
        ],
    )
}

fn general_assistant_skill() -> AgentSkill {
    AgentSkill::new(
        "general-assistant",
        "General Assistant",
        "General conversational AI assistant that can help with questions, provide \
         information, and perform various tasks using available tools.",
        &["chat", "assistant", "general", "conversation"],
        &[
            "Hello, how are you?",
            "Can you help me with a question?",
            "I need assistance with a task",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_share_shape_but_differ_in_skills() {
        let chat = AgentCard::for_profile(DeploymentProfile::LangflowChat, 9999);
        assert_eq!(chat.skills.len(), 1);
        assert_eq!(chat.skills[0].id, "langflow-chat");
        assert_eq!(chat.url, "http://localhost:9999/");

        let simple = AgentCard::for_profile(DeploymentProfile::SimpleAgent, 10000);
        let ids: Vec<_> = simple.skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["url-content-retrieval", "arithmetic-calculator", "general-assistant"]
        );
        assert_eq!(simple.default_input_modes, chat.default_input_modes);
    }

    #[test]
    fn test_card_wire_format() {
        let card = AgentCard::for_profile(DeploymentProfile::LangflowChat, 9999);
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["defaultOutputModes"][1], "text/plain");
        assert_eq!(value["capabilities"]["streaming"], false);
        assert_eq!(value["capabilities"]["pushNotifications"], false);
    }
}
