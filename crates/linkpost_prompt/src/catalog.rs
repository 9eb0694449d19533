//! Fixed catalogs the synthesizer draws from.

/// Topics used when the caller does not supply one.
pub const TOPICS: [&str; 15] = [
    "bun runtime",
    "javascript",
    "node.js",
    "PostgreSQL",
    "AWS Lambda",
    "TypeScript",
    "React",
    "Docker",
    "Kubernetes",
    "Microservices",
    "CI/CD",
    "DevOps",
    "Cloud Computing",
    "Serverless",
    "Web Performance",
];

/// Style directives. Each is followed by the topic in the rendered prompt.
pub const POST_STYLES: [&str; 7] = [
    "Share an insightful tip about",
    "Discuss a common mistake developers make with",
    "Share a recent learning experience with",
    "Compare different approaches to",
    "Discuss the future of",
    "Get latest blog about it and share about it",
    "Share an interesting use case for",
];

/// Tone directives.
pub const POST_TONES: [&str; 6] = [
    "Keep it professional and informative",
    "Make it engaging and conversational",
    "Write in a teaching style",
    "Share a personal experience or story",
    "Use a problem-solving approach",
    "Keep it concise and to the point",
];
