//! Host adapter
//!
//! Binds the typing pipeline to whatever hands out pages and frames. A host
//! only has to resolve a selector to a [`TargetSurface`]; [`HumanTyping`]
//! does the rest. Attaching to a page or frame yields a [`BoundTypist`]
//! rather than mutating the host's objects.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::options::TypingOptions;
use crate::surface::TargetSurface;
use crate::typing::random::{self, RandomSource};
use crate::typing::{execute, synthesize, FlowPlan};
use crate::TypingConfig;

/// Resolves selectors to typeable surfaces (a page, a frame, ...)
#[async_trait]
pub trait SurfaceResolver: Send + Sync {
    type Surface: TargetSurface;

    /// Find the field matching `selector`
    async fn resolve(&self, selector: &str) -> Result<Self::Surface>;
}

/// The human typing plugin
///
/// Cheap to clone; all clones share one read-only configuration.
#[derive(Debug, Clone)]
pub struct HumanTyping {
    config: Arc<TypingConfig>,
}

impl HumanTyping {
    /// Plugin name
    pub const NAME: &'static str = "human-typing";

    pub fn new(config: TypingConfig) -> Self {
        Self::with_shared(Arc::new(config))
    }

    /// Build from the option surface
    pub fn from_options(options: TypingOptions) -> Result<Self> {
        Ok(Self::new(TypingConfig::from_options(options)?))
    }

    /// Use an already shared configuration
    pub fn with_shared(config: Arc<TypingConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Arc<TypingConfig> {
        &self.config
    }

    /// Plan the keystrokes for `text`
    pub fn plan(&self, text: &str) -> FlowPlan {
        self.plan_with(text, &mut random::from_entropy())
    }

    /// Plan the keystrokes for `text` with a caller-supplied random source
    pub fn plan_with<R: RandomSource + ?Sized>(&self, text: &str, rng: &mut R) -> FlowPlan {
        synthesize(text, self.config.layout(), self.config.typo_chance(), rng)
    }

    /// Type `text` into an already resolved surface
    pub async fn type_into<S: TargetSurface + ?Sized>(&self, surface: &S, text: &str) -> Result<()> {
        let mut rng = random::from_entropy();
        self.type_into_with(surface, text, &mut rng).await
    }

    /// Type `text` drawing every random value from `rng`
    pub async fn type_into_with<S, R>(&self, surface: &S, text: &str, rng: &mut R) -> Result<()>
    where
        S: TargetSurface + ?Sized,
        R: RandomSource + Send + ?Sized,
    {
        let plan = self.plan_with(text, rng);
        execute(
            surface,
            &plan,
            self.config.delays(),
            self.config.warm_up(),
            rng,
        )
        .await
    }

    /// Resolve `selector` on `host` and type `text` into it
    pub async fn type_human<H: SurfaceResolver + ?Sized>(
        &self,
        host: &H,
        selector: &str,
        text: &str,
    ) -> Result<()> {
        let surface = host.resolve(selector).await?;
        tracing::debug!("Human typing into '{}'", selector);
        self.type_into(&surface, text).await
    }

    /// Bind the plugin to one page or frame
    pub fn attach<H: SurfaceResolver>(&self, host: H) -> BoundTypist<H> {
        BoundTypist {
            typing: self.clone(),
            host,
        }
    }

    /// Bind the plugin to every page and frame a host reports
    pub fn attach_all<H, I>(&self, hosts: I) -> Vec<BoundTypist<H>>
    where
        H: SurfaceResolver,
        I: IntoIterator<Item = H>,
    {
        hosts.into_iter().map(|host| self.attach(host)).collect()
    }
}

/// A page or frame with `type_human` available
pub struct BoundTypist<H> {
    typing: HumanTyping,
    host: H,
}

impl<H: SurfaceResolver> BoundTypist<H> {
    /// Resolve `selector` and type `text` into it
    pub async fn type_human(&self, selector: &str, text: &str) -> Result<()> {
        self.typing.type_human(&self.host, selector, text).await
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn typing(&self) -> &HumanTyping {
        &self.typing
    }
}
