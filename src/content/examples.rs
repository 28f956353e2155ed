//! Shared code snippets referenced from several documentation pages.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// An authored snippet. The text is shown and copied exactly as written.
pub struct CodeExample {
    /// Key used by `@example` references.
    pub key: &'static str,
    /// Highlighting language tag.
    pub language: &'static str,
    /// Snippet source.
    pub text: &'static str,
}

#[must_use]
/// Look up a snippet by key.
pub fn example(key: &str) -> Option<&'static CodeExample> {
    CODE_EXAMPLES.iter().find(|e| e.key == key)
}

/// The example table.
pub static CODE_EXAMPLES: &[CodeExample] = &[
    CodeExample {
        key: "installation",
        language: "bash",
        text: "pip install a2a-publisher",
    },
    CodeExample {
        key: "basic-publish",
        language: "bash",
        text: "a2a-publisher publish ./a2a-card.json",
    },
    CodeExample {
        key: "sdk-installation",
        language: "bash",
        text: "pip install a2a-reg-sdk",
    },
    CodeExample {
        key: "sdk-basic-usage",
        language: "python",
        text: SDK_BASIC_USAGE,
    },
    CodeExample {
        key: "sdk-advanced",
        language: "python",
        text: SDK_ADVANCED,
    },
    CodeExample {
        key: "sdk-query",
        language: "python",
        text: SDK_QUERY,
    },
    CodeExample {
        key: "github-basic-usage",
        language: "python",
        text: GITHUB_BASIC_USAGE,
    },
    CodeExample {
        key: "github-advanced-agent",
        language: "python",
        text: GITHUB_ADVANCED_AGENT,
    },
    CodeExample {
        key: "github-publisher-example",
        language: "python",
        text: GITHUB_PUBLISHER_EXAMPLE,
    },
    CodeExample {
        key: "a2a-card",
        language: "json",
        text: A2A_CARD,
    },
    CodeExample {
        key: "python-agent",
        language: "python",
        text: PYTHON_AGENT,
    },
    CodeExample {
        key: "api-publish",
        language: "bash",
        text: API_PUBLISH,
    },
];

const SDK_BASIC_USAGE: &str = r#"from a2a_reg_sdk import A2ARegistry, AgentCard

# Initialize the registry client
registry = A2ARegistry(
    api_key="your-api-key-here",
    base_url="https://registry.a2areg.com"
)

# Create an agent card
agent = AgentCard(
    name="my-intelligent-agent",
    version="1.0.0",
    description="A powerful AI agent for text processing",
    author="Your Name <you@example.com>",
    tags=["nlp", "text-processing", "ai"],
    framework="langchain",
    runtime="python",
    entry_point="src/main.py"
)

# Publish the agent
try:
    result = registry.publish(agent)
    print(f"Agent published successfully: {result.agent_id}")
except Exception as e:
    print(f"Publication failed: {e}")"#;

const SDK_ADVANCED: &str = r#"from a2a_reg_sdk import A2ARegistry, AgentCard, Dependency

# Advanced agent configuration
agent = AgentCard(
    name="advanced-nlp-agent",
    version="2.1.0",
    description="Advanced NLP agent with multi-model support",
    author="AI Team <ai-team@company.com>",
    tags=["nlp", "transformers", "enterprise", "production"],
    framework="transformers",
    runtime="python",
    entry_point="src/agent.py",
    dependencies=[
        Dependency("transformers", "^4.20.0"),
        Dependency("torch", "^2.0.0"),
        Dependency("numpy", "^1.21.0")
    ],
    capabilities=[
        "text-generation",
        "sentiment-analysis",
        "named-entity-recognition",
        "text-classification"
    ],
    resources={
        "memory": "2Gi",
        "cpu": "1000m",
        "gpu": "1"
    },
    environment_variables={
        "MODEL_PATH": "/models/bert-base-uncased",
        "MAX_SEQUENCE_LENGTH": "512"
    }
)

# Initialize registry with custom configuration
registry = A2ARegistry(
    api_key="your-api-key",
    base_url="https://registry.a2areg.com",
    timeout=30,
    retry_attempts=3
)

# Publish with metadata
result = registry.publish(
    agent,
    private=False,
    license="MIT",
    documentation_url="https://docs.example.com/agent"
)

print(f"Published agent: {result.agent_id}")
print(f"Registry URL: {result.registry_url}")"#;

const SDK_QUERY: &str = r#"from a2a_reg_sdk import A2ARegistry

registry = A2ARegistry(api_key="your-api-key")

# Search for agents
agents = registry.search(
    query="text processing",
    tags=["nlp", "ai"],
    framework="langchain",
    limit=10
)

for agent in agents:
    print(f"Agent: {agent.name} v{agent.version}")
    print(f"Description: {agent.description}")
    print(f"Tags: {', '.join(agent.tags)}")
    print("---")

# Get specific agent details
agent_details = registry.get_agent("agent-id-here")
print(f"Agent capabilities: {agent_details.capabilities}")

# Download agent
registry.download_agent("agent-id-here", "./downloaded-agent/")"#;

const GITHUB_BASIC_USAGE: &str = r#"#!/usr/bin/env python3
"""
Basic A2A SDK Usage Example
This example demonstrates basic usage of the A2A Python SDK for:
- Connecting to the registry
- Publishing an agent
- Searching for agents
- Updating and deleting agents
"""
import os
from a2a_reg_sdk import A2AClient, AgentBuilder, AgentCapabilities, AuthScheme

def main():
    # Initialize the client
    client = A2AClient(
        registry_url="http://localhost:8000",
        client_id=os.getenv("A2A_CLIENT_ID"),
        client_secret=os.getenv("A2A_CLIENT_SECRET"),
    )

    # Authenticate (required for publishing)
    try:
        client.authenticate()
        print("✓ Authentication successful")
    except Exception as e:
        print(f"✗ Authentication failed: {e}")
        return

    # Create a simple agent
    capabilities = AgentCapabilities(
        protocols=["http"],
        supported_formats=["json"],
        max_concurrent_requests=5
    )

    auth_scheme = AuthScheme(
        type="api_key",
        description="Simple API key authentication",
        required=True,
        header_name="X-API-Key",
    )

    agent = (
        AgentBuilder("my-test-agent", "A test agent for demonstration", "1.0.0", "my-org")
        .with_tags(["test", "demo", "ai"])
        .with_location("https://my-org.com/api/agent")
        .with_capabilities(capabilities)
        .with_auth_schemes([auth_scheme])
        .public(True)
        .active(True)
        .build()
    )

    try:
        # Publish the agent
        published_agent = client.publish_agent(agent)
        print(f"✓ Agent published successfully with ID: {published_agent.id}")

        # List public agents
        agents_response = client.list_agents(page=1, limit=10)
        print(f"✓ Found {len(agents_response.get('agents', []))} public agents")

        # Search for agents
        search_results = client.search_agents(
            query="test", filters={"tags": ["demo"]}, page=1, limit=5
        )
        print(f"✓ Search found {len(search_results.get('agents', []))} matching agents")

        # Get agent details
        agent_details = client.get_agent(published_agent.id)
        print(f"✓ Retrieved agent details: {agent_details.name}")

        # Update the agent
        agent_details.description = "Updated description for my test agent"
        updated_agent = client.update_agent(published_agent.id, agent_details)
        print(f"✓ Agent updated successfully")

        # Clean up - delete the agent
        client.delete_agent(published_agent.id)
        print(f"✓ Agent deleted successfully")

    except Exception as e:
        print(f"✗ Operation failed: {e}")
    finally:
        # Close the client
        client.close()

if __name__ == "__main__":
    main()"#;

const GITHUB_ADVANCED_AGENT: &str = r#"#!/usr/bin/env python3
"""
Advanced A2A Agent Example
This example demonstrates creating a sophisticated agent with:
- Complex capabilities and skills
- Multiple authentication schemes
- TEE (Trusted Execution Environment) details
- Comprehensive agent card metadata
"""
import os
from a2a_reg_sdk import (
    A2AClient,
    AgentBuilder,
    AgentCapabilities,
    AuthScheme,
    AgentTeeDetails,
    AgentSkills,
)

def create_advanced_agent():
    """Create an advanced agent with comprehensive configuration."""

    # Define sophisticated capabilities
    capabilities = AgentCapabilities(
        protocols=["http", "websocket", "grpc"],
        supported_formats=["json", "xml", "protobuf", "msgpack"],
        max_request_size=10485760,  # 10MB
        max_concurrent_requests=50,
        a2a_version="1.0",
    )

    # Define multiple authentication schemes
    auth_schemes = [
        AuthScheme(
            type="api_key",
            description="API key for basic authentication",
            required=True,
            header_name="X-API-Key",
        ),
        AuthScheme(
            type="oauth2",
            description="OAuth 2.0 for advanced authentication",
            required=False,
        ),
        AuthScheme(
            type="jwt",
            description="JWT tokens for stateless authentication",
            required=False,
            header_name="Authorization",
        ),
    ]

    # Define TEE details for secure execution
    tee_details = AgentTeeDetails(
        enabled=True,
        provider="Intel SGX",
        attestation="eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9...",
    )

    # Define agent skills with detailed schemas
    skills = AgentSkills(
        input_schema={
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Natural language query or command",
                },
                "options": {
                    "type": "object",
                    "properties": {
                        "max_tokens": {"type": "integer", "minimum": 1, "maximum": 4096},
                        "temperature": {"type": "number", "minimum": 0.0, "maximum": 2.0},
                    },
                },
            },
            "required": ["query"],
        },
        output_schema={
            "type": "object",
            "properties": {
                "response": {"type": "string", "description": "Generated response"},
                "confidence": {"type": "number", "minimum": 0.0, "maximum": 1.0},
            },
            "required": ["response", "confidence"],
        },
        examples=[
            "Query: 'Explain quantum computing' -> Response: 'Quantum computing is...', Confidence: 0.92",
            "Query: 'Translate hello to French' -> Response: 'Bonjour', Confidence: 0.98",
        ],
    )

    # Build the complete agent
    agent = (
        AgentBuilder(
            name="advanced-ai-assistant",
            description="An advanced AI assistant with multi-modal capabilities, secure TEE execution, and comprehensive API support",
            version="2.1.0",
            provider="advanced-ai-corp",
        )
        .with_tags(["ai", "assistant", "nlp", "multimodal", "secure", "enterprise", "tee"])
        .with_location("https://api.advanced-ai.com/v2/agent", "api_endpoint")
        .with_capabilities(capabilities)
        .with_auth_schemes(auth_schemes)
        .with_tee_details(tee_details)
        .with_skills(skills)
        .public(True)
        .active(True)
        .build()
    )

    return agent

def main():
    # Initialize client
    client = A2AClient(
        registry_url="http://localhost:8000",
        client_id=os.getenv("A2A_CLIENT_ID"),
        client_secret=os.getenv("A2A_CLIENT_SECRET"),
    )

    try:
        # Authenticate
        client.authenticate()
        print("✓ Authentication successful")

        # Create advanced agent
        advanced_agent = create_advanced_agent()
        print(f"✓ Created advanced agent: {advanced_agent.name}")
        print(f"  - Tags: {', '.join(advanced_agent.tags)}")
        print(f"  - Protocols: {', '.join(advanced_agent.capabilities.protocols)}")
        print(f"  - Auth schemes: {len(advanced_agent.auth_schemes)}")
        print(f"  - TEE enabled: {advanced_agent.tee_details.enabled}")

        # Publish the agent
        published_agent = client.publish_agent(advanced_agent)
        print(f"✓ Advanced agent published with ID: {published_agent.id}")

        # Search for advanced features
        search_results = client.search_agents(
            query="advanced AI TEE secure",
            filters={
                "tags": ["enterprise", "secure"],
                "capabilities.protocols": ["grpc"],
            },
            semantic=True,
        )
        print(f"✓ Semantic search found {len(search_results.get('agents', []))} matching agents")

        # Clean up
        client.delete_agent(published_agent.id)
        print("✓ Advanced agent deleted")

    except Exception as e:
        print(f"✗ Operation failed: {e}")
        import traceback
        traceback.print_exc()
    finally:
        client.close()

if __name__ == "__main__":
    main()"#;

const GITHUB_PUBLISHER_EXAMPLE: &str = r#"#!/usr/bin/env python3
"""
A2A Agent Publisher Example
This example demonstrates using the high-level AgentPublisher class for:
- Creating sample agent configurations
- Loading agents from configuration files
- Publishing and managing agents with validation
"""
import os
from pathlib import Path
from a2a_reg_sdk import A2AClient, AgentPublisher

def main():
    # Create client and publisher
    client = A2AClient(
        registry_url="http://localhost:8000",
        client_id=os.getenv("A2A_CLIENT_ID"),
        client_secret=os.getenv("A2A_CLIENT_SECRET"),
    )

    try:
        client.authenticate()
        print("✓ Authentication successful")
    except Exception as e:
        print(f"✗ Authentication failed: {e}")
        return

    publisher = AgentPublisher(client)

    # Create a sample agent configuration
    sample_agent = publisher.create_sample_agent(
        name="sample-chatbot",
        description="A sample AI chatbot agent",
        version="1.2.0",
        provider="demo-corp",
        api_url="https://demo-corp.com/api",
    )
    print(f"✓ Created sample agent: {sample_agent.name}")

    # Save the configuration to a file
    config_path = Path("sample_agent.yaml")
    publisher.save_agent_config(sample_agent, config_path, format="yaml")
    print(f"✓ Saved agent configuration to {config_path}")

    try:
        # Validate the agent
        validation_errors = publisher.validate_agent(sample_agent)
        if validation_errors:
            print(f"✗ Validation errors: {validation_errors}")
            return
        else:
            print("✓ Agent configuration is valid")

        # Publish the agent
        published_agent = publisher.publish(sample_agent, validate=True)
        print(f"✓ Agent published with ID: {published_agent.id}")

        # Update the agent
        published_agent.description = "Updated sample AI chatbot with new features"
        updated_agent = publisher.update(
            published_agent.id, published_agent, validate=True
        )
        print(f"✓ Agent updated successfully")

        # Clean up
        client.delete_agent(published_agent.id)
        print("✓ Cleanup completed")

    except Exception as e:
        print(f"✗ Operation failed: {e}")
    finally:
        # Clean up the config file
        if config_path.exists():
            config_path.unlink()
        client.close()

if __name__ == "__main__":
    main()"#;

const A2A_CARD: &str = r#"{
  "name": "my-ai-agent",
  "version": "1.0.0",
  "description": "An intelligent assistant agent",
  "author": "Your Name <your.email@example.com>",
  "tags": ["nlp", "assistant", "enterprise"],
  "framework": "langchain",
  "runtime": "python",
  "entry_point": "src/agent.py",
  "dependencies": {
    "langchain": "^0.1.0",
    "openai": "^1.0.0"
  },
  "capabilities": [
    "text-generation",
    "question-answering",
    "summarization"
  ],
  "resources": {
    "memory": "512Mi",
    "cpu": "500m"
  }
}"#;

const PYTHON_AGENT: &str = r#"from langchain.agents import AgentType, initialize_agent
from langchain.llms import OpenAI
from langchain.tools import Tool

class MyAgent:
    def __init__(self):
        self.llm = OpenAI(temperature=0.7)

    def process(self, query: str) -> str:
        """Process user query and return response"""
        return self.llm(query)

    def get_capabilities(self) -> list:
        """Return agent capabilities"""
        return ["text-generation", "question-answering"]"#;

const API_PUBLISH: &str = r#"curl -X POST https://registry.a2areg.com/api/v1/agents \
  -H "Authorization: Bearer YOUR_TOKEN" \
  -H "Content-Type: application/json" \
  -d @a2a-card.json"#;
