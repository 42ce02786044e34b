//! Page Content
//!
//! The literal marketing content: features, use cases, FAQ entries, the
//! hero code example and all links. Accessors hand out `'static` tables.

use crate::model::{CodeSample, FaqEntry, Feature, IconId, NavLink, UseCase};

/// Product name shown in the navbar, hero and footer
pub const PRODUCT_NAME: &str = "TRust";

/// One-line product description
pub const TAGLINE: &str = "TypeScript-to-Rust Performance Bridge";

/// Hero paragraph under the headline
pub const HERO_COPY: &str = "Write in TypeScript, automatically compile \
performance-critical code to Rust and WASM. Get native performance without \
leaving your TypeScript comfort zone.";

/// Source hosting link, used by the navbar, hero CTA and footer
pub const REPO_URL: &str = "https://github.com/blackdoyen/trust";

/// Community links shown in the footer
pub const REDDIT_URL: &str = "https://reddit.com/r/trustlang";
pub const DISCORD_URL: &str = "https://discord.gg/trustlang";

/// In-page anchor navigation, shared by the navbar and the mobile menu
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Use Cases", href: "#use-cases" },
    NavLink { label: "Documentation", href: "#docs" },
    NavLink { label: "FAQ", href: "#faq" },
];

/// Documentation column in the footer
pub const FOOTER_DOC_LINKS: &[NavLink] = &[
    NavLink { label: "Getting Started", href: "#docs" },
    NavLink { label: "API Reference", href: "#docs" },
    NavLink { label: "Examples", href: "#docs" },
];

const FEATURES: &[Feature] = &[
    Feature {
        icon: IconId::Zap,
        title: "Smart Transpilation",
        description: "Automatically convert performance-critical TypeScript \
            code to optimized Rust implementations with zero overhead.",
    },
    Feature {
        icon: IconId::Box,
        title: "State Management",
        description: "Seamless state synchronization between TypeScript \
            frontend and Rust backend with automatic memory management.",
    },
    Feature {
        icon: IconId::Cpu,
        title: "WASM Integration",
        description: "Native-like performance through WebAssembly compilation \
            with automatic optimization and threading support.",
    },
    Feature {
        icon: IconId::Brain,
        title: "Smart Optimization",
        description: "Intelligent code analysis for automatic parallelization \
            and memory optimization in critical paths.",
    },
    Feature {
        icon: IconId::Lock,
        title: "Type Safety",
        description: "End-to-end type safety from TypeScript through Rust to \
            WebAssembly with zero runtime overhead.",
    },
    Feature {
        icon: IconId::Workflow,
        title: "Developer Experience",
        description: "Seamless integration with existing tooling, hot reload \
            support, and detailed performance insights.",
    },
    Feature {
        icon: IconId::Terminal,
        title: "Zero Config Setup",
        description: "Get started in minutes with zero configuration. TRust \
            automatically detects and optimizes performance-critical code.",
    },
    Feature {
        icon: IconId::Refresh,
        title: "Hot Reload Support",
        description: "Instant feedback during development with hot module \
            replacement for both TypeScript and Rust code.",
    },
];

/// The feature cards, in display order
pub const fn features() -> &'static [Feature] {
    FEATURES
}

const USE_CASES: &[UseCase] = &[
    UseCase {
        icon: IconId::Refresh,
        title: "Data Processing",
        description: "High-performance data transformation and analysis with \
            automatic parallelization.",
        sample: CodeSample {
            language: "typescript",
            title: "Data Processing",
            source: r"@trust.compute
processData(items: DataItem[]): ProcessedResult[] {
  return items
    .filter(item => item.value > threshold)
    .map(item => transform(item))
    .sort(compareItems);
}",
        },
    },
    UseCase {
        icon: IconId::Gauge,
        title: "Game Development",
        description: "Complex game state management and physics calculations \
            in Rust.",
        sample: CodeSample {
            language: "typescript",
            title: "Game Development",
            source: r"@trust.state
class GameEngine {
  @rust.compute
  updatePhysics(delta: number) {
    this.entities.forEach(entity => {
      entity.position = calculateNewPosition(entity, delta);
      handleCollisions(entity, this.world);
    });
  }
}",
        },
    },
    UseCase {
        icon: IconId::Rocket,
        title: "Real-time Analytics",
        description: "Process and analyze large datasets with native \
            performance.",
        sample: CodeSample {
            language: "typescript",
            title: "Real-time Analytics",
            source: r"@trust.worker
class AnalyticsEngine {
  @rust.parallel
  aggregateMetrics(events: Event[]): Metrics {
    return events
      .groupBy(event => event.type)
      .map(group => calculateStats(group))
      .reduce(combineMetrics);
  }
}",
        },
    },
    UseCase {
        icon: IconId::Brain,
        title: "Machine Learning",
        description: "Run complex ML algorithms with native performance using \
            Rust's parallel processing capabilities.",
        sample: CodeSample {
            language: "typescript",
            title: "Machine Learning",
            source: r"@trust.worker
class MLProcessor {
  @rust.parallel
  trainModel(dataset: TrainingData[]): Model {
    return dataset
      .partition(4)
      .map(batch => processBatch(batch))
      .reduce(mergeResults);
  }
}",
        },
    },
];

/// The use-case rows, in display order
pub const fn use_cases() -> &'static [UseCase] {
    USE_CASES
}

/// The side-by-side hero example: TypeScript input and generated Rust
pub const CODE_EXAMPLE: &[CodeSample; 2] = &[
    CodeSample {
        language: "typescript",
        title: "TypeScript Input",
        source: r"@trust.compile
class DataProcessor {
    @rust.optimize
    processLargeArray(data: number[]): number[] {
        return data.map(x => x * x)
                  .filter(x => x > 100)
                  .sort();
    }

    @rust.state
    private cache: Map<string, number[]> = new Map();
}",
    },
    CodeSample {
        language: "rust",
        title: "Generated Rust",
        source: r#"#[wasm_bindgen]
pub struct DataProcessor {
    cache: HashMap<String, Vec<f64>>,
}

#[wasm_bindgen]
impl DataProcessor {
    pub fn process_large_array(data: &[f64]) -> Vec<f64> {
        let mut result: Vec<f64> = data.par_iter()
            .map(|x| x * x)
            .filter(|x| *x > 100.0)
            .collect();
        result.sort_unstable_by(|a, b|
            a.partial_cmp(b).unwrap());
        result
    }
}"#,
    },
];

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How does TRust optimize my TypeScript code?",
        answer: "TRust analyzes your TypeScript code, identifies \
            performance-critical sections marked with decorators, and \
            automatically generates optimized Rust code. This code is then \
            compiled to WebAssembly, providing near-native performance while \
            maintaining type safety and developer experience.",
    },
    FaqEntry {
        question: "Do I need Rust knowledge to use TRust?",
        answer: "No! TRust handles all Rust code generation automatically. \
            You continue writing TypeScript as usual, using our decorators to \
            mark code for optimization. The bridge between TypeScript and \
            Rust is completely transparent.",
    },
    FaqEntry {
        question: "What performance improvements can I expect?",
        answer: "Performance gains vary by use case, but CPU-intensive \
            operations typically see 2-10x speedups when compiled to \
            Rust/WASM. Data processing, complex calculations, and state \
            management particularly benefit from TRust's optimizations.",
    },
    FaqEntry {
        question: "Can I use TRust with my existing framework?",
        answer: "Yes! TRust is framework-agnostic and works seamlessly with \
            React, Vue, Angular, and other JavaScript frameworks. We provide \
            specific integrations and examples for popular frameworks to get \
            you started quickly.",
    },
    FaqEntry {
        question: "How does state synchronization work?",
        answer: "TRust maintains a synchronized state between TypeScript and \
            Rust using a zero-copy bridge. Changes in either language are \
            automatically reflected in the other with minimal overhead.",
    },
    FaqEntry {
        question: "What's the deployment process like?",
        answer: "TRust integrates with your existing build pipeline. During \
            production builds, it automatically compiles marked code to Rust, \
            generates WASM, and bundles everything together.",
    },
];

/// The FAQ entries, in display order
pub const fn faqs() -> &'static [FaqEntry] {
    FAQS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(features().len(), 8);
        assert_eq!(use_cases().len(), 4);
        assert_eq!(faqs().len(), 6);
        assert_eq!(NAV_LINKS.len(), 4);
    }

    #[test]
    fn test_no_empty_fields() {
        for feature in features() {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
        for case in use_cases() {
            assert!(!case.title.is_empty());
            assert!(!case.description.is_empty());
            assert!(!case.sample.source.is_empty());
        }
        for entry in faqs() {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }

    #[test]
    fn test_nav_links_are_in_page_anchors() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
        }
    }

    #[test]
    fn test_samples_carry_language_tokens() {
        for case in use_cases() {
            assert_eq!(case.sample.language, "typescript");
        }
        assert_eq!(CODE_EXAMPLE[0].language, "typescript");
        assert_eq!(CODE_EXAMPLE[1].language, "rust");
    }

    #[test]
    fn test_content_serializes() {
        let json = serde_json::to_string(features()).unwrap();
        assert!(json.contains("Smart Transpilation"));
        let json = serde_json::to_string(faqs()).unwrap();
        assert!(json.contains("zero-copy bridge"));
    }
}
