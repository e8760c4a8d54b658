use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use roundtable_application::ports::response_provider::{ProviderError, ResponseProvider};
use roundtable_domain::{Character, Message, ProviderClass, Topic};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Dispatches each character to the adapter that serves its provider class.
pub struct RoutingProvider {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    /// Provider class to adapter index, from `[providers.routing]`
    explicit_class_routing: HashMap<ProviderClass, usize>,
}

impl RoutingProvider {
    /// Build a router over `providers`.
    ///
    /// `routing` maps a provider class name ("openai", "bedrock") to a
    /// provider name. Entries naming an unknown class or provider, or a
    /// provider that was not constructed, are skipped.
    pub fn new(
        providers: Vec<Arc<dyn ProviderAdapter>>,
        routing: &HashMap<String, String>,
    ) -> Self {
        let mut explicit_class_routing = HashMap::new();

        for (class_name, provider_name) in routing {
            let Ok(class) = class_name.parse::<ProviderClass>() else {
                warn!("Ignoring routing for unknown provider class '{}'", class_name);
                continue;
            };
            let Some(target_kind) = ProviderKind::from_name(provider_name) else {
                warn!("Ignoring routing to unknown provider '{}'", provider_name);
                continue;
            };

            match providers.iter().position(|p| p.kind() == target_kind) {
                Some(idx) => {
                    explicit_class_routing.insert(class, idx);
                }
                None => warn!(
                    "Routing {} -> {} ignored: provider is not configured",
                    class_name, provider_name
                ),
            }
        }

        Self {
            providers,
            explicit_class_routing,
        }
    }

    /// Kinds of the adapters this router holds, in registration order
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Routing priority:
    ///  1. explicit `[providers.routing]` entry for the class
    ///  2. the adapter whose kind has the same name as the class
    ///  3. otherwise `Unavailable`, so the caller falls back
    fn resolve_provider(
        &self,
        class: ProviderClass,
    ) -> Result<&dyn ProviderAdapter, ProviderError> {
        if let Some(&idx) = self.explicit_class_routing.get(&class) {
            return Ok(self.providers[idx].as_ref());
        }

        let same_name = ProviderKind::from_name(class.as_str());
        self.providers
            .iter()
            .find(|p| Some(p.kind()) == same_name)
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                ProviderError::Unavailable(format!("no provider configured for class {}", class))
            })
    }
}

#[async_trait]
impl ResponseProvider for RoutingProvider {
    async fn generate_turn(
        &self,
        character: &Character,
        topic: &Topic,
        transcript: &[Message],
        round: u32,
    ) -> Result<String, ProviderError> {
        let provider = self.resolve_provider(character.provider)?;
        debug!("Routing turn for {} to {}", character.id, provider.kind());
        provider
            .generate_turn(character, topic, transcript, round)
            .await
    }

    async fn generate_summary(
        &self,
        moderator: &Character,
        topic: &Topic,
        transcript: &[Message],
    ) -> Result<String, ProviderError> {
        let provider = self.resolve_provider(moderator.provider)?;
        debug!("Routing summary for {} to {}", moderator.id, provider.kind());
        provider.generate_summary(moderator, topic, transcript).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_domain::{CharacterId, CharacterRegistry};

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockProvider {
        kind: ProviderKind,
    }

    impl MockProvider {
        fn new(kind: ProviderKind) -> Arc<dyn ProviderAdapter> {
            Arc::new(Self { kind })
        }
    }

    #[async_trait]
    impl ResponseProvider for MockProvider {
        async fn generate_turn(
            &self,
            character: &Character,
            _topic: &Topic,
            _transcript: &[Message],
            round: u32,
        ) -> Result<String, ProviderError> {
            Ok(format!("{}:{}:{}", self.kind, character.id, round))
        }

        async fn generate_summary(
            &self,
            moderator: &Character,
            _topic: &Topic,
            _transcript: &[Message],
        ) -> Result<String, ProviderError> {
            Ok(format!("{}:summary:{}", self.kind, moderator.id))
        }
    }

    impl ProviderAdapter for MockProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn character(id: &str) -> Character {
        CharacterRegistry::builtin()
            .lookup(&CharacterId::from(id))
            .unwrap()
            .clone()
    }

    fn topic() -> Topic {
        Topic::try_new("おすすめの日焼け止めは？").unwrap()
    }

    fn routing(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // -- resolve_provider routing priority tests -------------------------------

    #[test]
    fn class_routes_to_same_named_provider_by_default() {
        let router = RoutingProvider::new(
            vec![
                MockProvider::new(ProviderKind::OpenAi),
                MockProvider::new(ProviderKind::Bedrock),
            ],
            &HashMap::new(),
        );

        let provider = router.resolve_provider(ProviderClass::Bedrock).unwrap();
        assert_eq!(provider.kind(), ProviderKind::Bedrock);
        let provider = router.resolve_provider(ProviderClass::OpenAi).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn explicit_routing_takes_priority() {
        let router = RoutingProvider::new(
            vec![
                MockProvider::new(ProviderKind::OpenAi),
                MockProvider::new(ProviderKind::Bedrock),
            ],
            &routing(&[("bedrock", "openai")]),
        );

        let provider = router.resolve_provider(ProviderClass::Bedrock).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn missing_adapter_is_unavailable() {
        let router =
            RoutingProvider::new(vec![MockProvider::new(ProviderKind::OpenAi)], &HashMap::new());

        let result = router.resolve_provider(ProviderClass::Bedrock);
        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }

    #[test]
    fn empty_router_is_unavailable() {
        let router = RoutingProvider::new(vec![], &HashMap::new());
        assert!(router.resolve_provider(ProviderClass::OpenAi).is_err());
        assert!(router.kinds().is_empty());
    }

    #[test]
    fn unknown_routing_entries_are_ignored() {
        let router = RoutingProvider::new(
            vec![MockProvider::new(ProviderKind::OpenAi)],
            &routing(&[
                ("bedrock", "gemini"),
                ("gemini", "openai"),
                // Target kind exists by name but was not constructed
                ("openai", "bedrock"),
            ]),
        );

        assert!(router.explicit_class_routing.is_empty());
        let provider = router.resolve_provider(ProviderClass::OpenAi).unwrap();
        assert_eq!(provider.kind(), ProviderKind::OpenAi);
    }

    // -- ResponseProvider integration tests ------------------------------------

    #[tokio::test]
    async fn turn_and_summary_use_the_characters_class() {
        let router = RoutingProvider::new(
            vec![
                MockProvider::new(ProviderKind::OpenAi),
                MockProvider::new(ProviderKind::Bedrock),
            ],
            &HashMap::new(),
        );

        let turn = router
            .generate_turn(&character("suneko"), &topic(), &[], 2)
            .await
            .unwrap();
        assert_eq!(turn, "bedrock:suneko:2");

        let summary = router
            .generate_summary(&character("tamako"), &topic(), &[])
            .await
            .unwrap();
        assert_eq!(summary, "openai:summary:tamako");
    }

    #[tokio::test]
    async fn unrouted_character_fails_with_unavailable() {
        let router =
            RoutingProvider::new(vec![MockProvider::new(ProviderKind::OpenAi)], &HashMap::new());

        let err = router
            .generate_turn(&character("tsubaki"), &topic(), &[], 1)
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
    }
}
