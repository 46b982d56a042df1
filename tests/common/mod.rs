#![allow(dead_code)]

use async_trait::async_trait;
use indexmap::IndexSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use svelte_scoped_preprocess::{
    ClassTransformInput, ClassTransformer, Collaborators, GenerateOptions, GenerateResult, GeneratorFactory,
    PreprocessOptions, Processed, Result, SharedGenerator, StyleTransformInput, StyleTransformer, UnoGenerator,
    UserConfig,
};

pub const MOCK_CSS: &str = "*,::before{box-sizing:border-box}.p-4{padding:1rem}";
pub const MOCK_CSS_GLOBAL: &str = ":global(*),:global(::before){box-sizing:border-box}:global(.p-4){padding:1rem}";

/// Generator returning fixed CSS and recording every call
pub struct MockGenerator {
    pub config: UserConfig,
    pub calls: Mutex<Vec<(usize, GenerateOptions)>>,
}

impl MockGenerator {
    pub fn new(config: UserConfig) -> Self {
        Self {
            config,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(usize, GenerateOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UnoGenerator for MockGenerator {
    async fn generate(&self, tokens: &IndexSet<String>, options: GenerateOptions) -> Result<GenerateResult> {
        self.calls.lock().unwrap().push((tokens.len(), options));
        Ok(GenerateResult {
            css: MOCK_CSS.to_string(),
        })
    }

    fn config(&self) -> &UserConfig {
        &self.config
    }
}

/// Factory counting how many generators it built
#[derive(Default)]
pub struct MockFactory {
    pub creates: AtomicUsize,
    pub configs: Mutex<Vec<UserConfig>>,
    pub generators: Mutex<Vec<Arc<MockGenerator>>>,
}

impl MockFactory {
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn generator(&self) -> Arc<MockGenerator> {
        self.generators.lock().unwrap().last().cloned().expect("a generator was created")
    }
}

impl GeneratorFactory for MockFactory {
    fn create(&self, config: UserConfig) -> Result<SharedGenerator> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.configs.lock().unwrap().push(config.clone());
        let generator = Arc::new(MockGenerator::new(config));
        self.generators.lock().unwrap().push(generator.clone());
        Ok(generator)
    }
}

/// What the class transformer saw
#[derive(Debug, Clone)]
pub struct ClassCall {
    pub content: String,
    pub filename: String,
    pub options: PreprocessOptions,
    pub safelist: Vec<String>,
}

#[derive(Default)]
pub struct MockClassTransformer {
    pub calls: Mutex<Vec<ClassCall>>,
}

impl MockClassTransformer {
    pub fn calls(&self) -> Vec<ClassCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClassTransformer for MockClassTransformer {
    async fn transform(&self, input: ClassTransformInput<'_>) -> Result<Option<Processed>> {
        self.calls.lock().unwrap().push(ClassCall {
            content: input.content.to_string(),
            filename: input.filename.to_string(),
            options: input.options.clone(),
            safelist: input.uno.config().safelist.clone(),
        });
        if input.content.contains("class=") {
            Ok(Some(Processed::code(format!("<!-- {} -->{}", input.options.class_prefix(), input.content))))
        } else {
            Ok(None)
        }
    }
}

/// What the style transformer saw
#[derive(Debug, Clone)]
pub struct StyleCall {
    pub content: String,
    pub filename: Option<String>,
    pub prepend: String,
    pub apply_variables: Vec<String>,
    pub has_theme_fn: bool,
}

#[derive(Default)]
pub struct MockStyleTransformer {
    pub calls: Mutex<Vec<StyleCall>>,
}

impl MockStyleTransformer {
    pub fn calls(&self) -> Vec<StyleCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StyleTransformer for MockStyleTransformer {
    async fn transform(&self, input: StyleTransformInput<'_>) -> Result<Option<Processed>> {
        self.calls.lock().unwrap().push(StyleCall {
            content: input.content.to_string(),
            filename: input.filename.map(str::to_string),
            prepend: input.prepend.clone(),
            apply_variables: input.apply_variables.clone(),
            has_theme_fn: input.has_theme_fn,
        });
        Ok(Some(Processed::code(format!("{}/* transformed */{}", input.prepend, input.content))))
    }
}

/// Mocks wired together, with handles kept for assertions
pub struct Harness {
    pub factory: Arc<MockFactory>,
    pub classes: Arc<MockClassTransformer>,
    pub style: Arc<MockStyleTransformer>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            factory: Arc::new(MockFactory::default()),
            classes: Arc::new(MockClassTransformer::default()),
            style: Arc::new(MockStyleTransformer::default()),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(self.classes.clone(), self.style.clone()).with_generator_factory(self.factory.clone())
    }
}
