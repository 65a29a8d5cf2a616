// crates/stack-decision-core/src/core/builtin_catalog.rs
// ============================================================================
// Module: Stack Decision Built-in Catalog Data
// Description: Static tool candidate table shipped with the engine.
// Purpose: Seed the process-wide catalog with curated reference data.
// Dependencies: crate::core::{catalog, category}
// ============================================================================

//! ## Overview
//! Declaration order inside each category doubles as the tie-break order for
//! selection, so the most conventional choice for a category is listed first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::DocumentationQuality;
use crate::core::catalog::Level;
use crate::core::catalog::PricingModel;
use crate::core::catalog::SupportLevel::Commercial;
use crate::core::catalog::SupportLevel::Community;
use crate::core::catalog::SupportLevel::Enterprise;
use crate::core::catalog::ToolSeed;
use crate::core::catalog::ToolType;
use crate::core::category::ComponentCategory;

// ============================================================================
// SECTION: Seed Helpers
// ============================================================================

/// Amazon Web Services affinity.
const AWS: Option<&str> = Some("AWS");
/// Microsoft Azure affinity.
const AZURE: Option<&str> = Some("Azure");
/// Google Cloud affinity.
const GCP: Option<&str> = Some("GCP");
// Edge vendors such as Cloudflare front any provider and carry no affinity.

/// Declares a [`ToolSeed`] positionally:
/// category, id, name, type, pricing, cost, complexity, popularity, docs,
/// effort, cloud, support.
macro_rules! seed {
    (
        $category:ident,
        $id:literal,
        $name:literal,
        $tool_type:ident,
        $pricing:ident,
        $cost:expr,
        $complexity:ident,
        $popularity:expr,
        $docs:ident,
        $effort:ident,
        $cloud:expr,
        $support:expr $(,)?
    ) => {
        ToolSeed {
            id: $id,
            category: ComponentCategory::$category,
            name: $name,
            tool_type: ToolType::$tool_type,
            pricing: PricingModel::$pricing,
            cost: $cost,
            complexity: Level::$complexity,
            popularity: $popularity,
            docs: DocumentationQuality::$docs,
            effort: Level::$effort,
            cloud: $cloud,
            support: $support,
        }
    };
}

// ============================================================================
// SECTION: Built-in Tools
// ============================================================================

/// Built-in tool table in category, then preference, order.
#[rustfmt::skip]
pub(crate) static BUILTIN_TOOLS: &[ToolSeed] = &[
    // database
    seed!(Database, "postgresql", "PostgreSQL", OpenSource, Free, Some("Free"), Medium, Some(95), Excellent, Medium, None, Some(Community)),
    seed!(Database, "mysql", "MySQL", OpenSource, Free, Some("Free"), Medium, Some(88), Good, Medium, None, Some(Commercial)),
    seed!(Database, "mongodb", "MongoDB", OpenSource, Freemium, Some("Free tier, Atlas from $57/month"), Medium, Some(85), Excellent, Low, None, Some(Commercial)),
    seed!(Database, "amazon-rds", "Amazon RDS", ManagedService, UsageBased, Some("Pay per instance hour"), Low, Some(82), Excellent, Low, AWS, Some(Enterprise)),
    seed!(Database, "amazon-dynamodb", "Amazon DynamoDB", ManagedService, UsageBased, Some("Pay per request"), Medium, Some(80), Good, Medium, AWS, Some(Enterprise)),
    seed!(Database, "supabase", "Supabase", ManagedService, Freemium, Some("Free tier, Pro $25/month"), Low, Some(78), Excellent, Low, None, Some(Commercial)),
    seed!(Database, "cloud-sql", "Google Cloud SQL", ManagedService, UsageBased, Some("Pay per instance hour"), Low, Some(72), Good, Low, GCP, Some(Enterprise)),
    seed!(Database, "azure-cosmos-db", "Azure Cosmos DB", ManagedService, UsageBased, Some("Pay per request unit"), Medium, Some(70), Good, Medium, AZURE, Some(Enterprise)),
    seed!(Database, "oracle-database", "Oracle Database", Commercial, Subscription, Some("$2,500/month"), High, Some(68), Good, High, None, Some(Enterprise)),

    // cache
    seed!(Cache, "redis", "Redis", OpenSource, Free, Some("Free"), Low, Some(94), Excellent, Low, None, Some(Commercial)),
    seed!(Cache, "memcached", "Memcached", OpenSource, Free, Some("Free"), Low, Some(75), Good, Low, None, Some(Community)),
    seed!(Cache, "amazon-elasticache", "Amazon ElastiCache", ManagedService, UsageBased, Some("Pay per node hour"), Low, Some(80), Excellent, Low, AWS, Some(Enterprise)),
    seed!(Cache, "azure-cache-for-redis", "Azure Cache for Redis", ManagedService, UsageBased, Some("Pay per node hour"), Low, Some(65), Good, Low, AZURE, Some(Enterprise)),
    seed!(Cache, "memorystore", "Google Memorystore", ManagedService, UsageBased, Some("Pay per GB hour"), Low, Some(60), Good, Low, GCP, Some(Enterprise)),

    // message-queue
    seed!(MessageQueue, "apache-kafka", "Apache Kafka", OpenSource, Free, Some("Free"), High, Some(90), Excellent, High, None, Some(Commercial)),
    seed!(MessageQueue, "rabbitmq", "RabbitMQ", OpenSource, Free, Some("Free"), Medium, Some(85), Excellent, Medium, None, Some(Commercial)),
    seed!(MessageQueue, "amazon-sqs", "Amazon SQS", ManagedService, UsageBased, Some("Pay per million requests"), Low, Some(82), Excellent, Low, AWS, Some(Enterprise)),
    seed!(MessageQueue, "google-pubsub", "Google Cloud Pub/Sub", ManagedService, UsageBased, Some("Pay per TiB"), Low, Some(75), Good, Low, GCP, Some(Enterprise)),
    seed!(MessageQueue, "confluent-cloud", "Confluent Cloud", ManagedService, Subscription, Some("$400/month"), Medium, Some(70), Excellent, Medium, None, Some(Enterprise)),
    seed!(MessageQueue, "nats", "NATS", OpenSource, Free, Some("Free"), Low, Some(65), Good, Low, None, Some(Community)),

    // ci-cd
    seed!(CiCd, "github-actions", "GitHub Actions", Freemium, Freemium, Some("2,000 free minutes/month"), Low, Some(92), Excellent, Low, None, Some(Commercial)),
    seed!(CiCd, "gitlab-ci", "GitLab CI/CD", Freemium, Freemium, Some("400 free minutes/month"), Medium, Some(80), Excellent, Medium, None, Some(Commercial)),
    seed!(CiCd, "jenkins", "Jenkins", OpenSource, Free, Some("Free"), High, Some(78), Good, High, None, Some(Community)),
    seed!(CiCd, "circleci", "CircleCI", Commercial, Subscription, Some("$15/month"), Low, Some(70), Good, Low, None, Some(Commercial)),
    seed!(CiCd, "aws-codepipeline", "AWS CodePipeline", ManagedService, UsageBased, Some("$1 per active pipeline"), Medium, Some(60), Good, Medium, AWS, Some(Enterprise)),

    // cloud-provider
    seed!(CloudProvider, "aws", "Amazon Web Services", ManagedService, UsageBased, Some("Pay as you go"), High, Some(95), Excellent, High, AWS, Some(Enterprise)),
    seed!(CloudProvider, "azure", "Microsoft Azure", ManagedService, UsageBased, Some("Pay as you go"), High, Some(85), Good, High, AZURE, Some(Enterprise)),
    seed!(CloudProvider, "gcp", "Google Cloud Platform", ManagedService, UsageBased, Some("Pay as you go"), Medium, Some(80), Excellent, Medium, GCP, Some(Enterprise)),
    seed!(CloudProvider, "digitalocean", "DigitalOcean", ManagedService, UsageBased, Some("Droplets from $4/month"), Low, Some(65), Excellent, Low, None, Some(Commercial)),

    // container-orchestration
    seed!(ContainerOrchestration, "kubernetes", "Kubernetes", OpenSource, Free, Some("Free"), High, Some(92), Excellent, High, None, Some(Community)),
    seed!(ContainerOrchestration, "amazon-eks", "Amazon EKS", ManagedService, UsageBased, Some("$0.10 per cluster hour"), High, Some(80), Good, Medium, AWS, Some(Enterprise)),
    seed!(ContainerOrchestration, "google-gke", "Google Kubernetes Engine", ManagedService, UsageBased, Some("$0.10 per cluster hour"), Medium, Some(78), Excellent, Medium, GCP, Some(Enterprise)),
    seed!(ContainerOrchestration, "amazon-ecs", "Amazon ECS", ManagedService, UsageBased, Some("Pay for underlying compute"), Low, Some(75), Good, Low, AWS, Some(Enterprise)),
    seed!(ContainerOrchestration, "azure-aks", "Azure Kubernetes Service", ManagedService, UsageBased, Some("Pay for underlying compute"), Medium, Some(72), Good, Medium, AZURE, Some(Enterprise)),
    seed!(ContainerOrchestration, "docker-swarm", "Docker Swarm", OpenSource, Free, Some("Free"), Low, Some(55), Fair, Low, None, Some(Community)),
    seed!(ContainerOrchestration, "hashicorp-nomad", "HashiCorp Nomad", OpenSource, Free, Some("Free"), Medium, Some(50), Good, Medium, None, Some(Commercial)),

    // security
    seed!(Security, "aws-iam", "AWS IAM", ManagedService, Free, Some("Free"), Medium, Some(88), Good, Medium, AWS, Some(Enterprise)),
    seed!(Security, "auth0", "Auth0", ManagedService, Freemium, Some("Free tier, Essentials $35/month"), Low, Some(84), Excellent, Low, None, Some(Enterprise)),
    seed!(Security, "hashicorp-vault", "HashiCorp Vault", OpenSource, Free, Some("Free"), High, Some(82), Excellent, High, None, Some(Commercial)),
    seed!(Security, "okta", "Okta", Commercial, Subscription, Some("$2/user/month"), Medium, Some(80), Excellent, Medium, None, Some(Enterprise)),
    seed!(Security, "keycloak", "Keycloak", OpenSource, Free, Some("Free"), Medium, Some(75), Good, Medium, None, Some(Community)),
    seed!(Security, "cloudflare-waf", "Cloudflare WAF", ManagedService, Subscription, Some("$20/month"), Low, Some(70), Good, Low, None, Some(Enterprise)),

    // search-engine
    seed!(SearchEngine, "elasticsearch", "Elasticsearch", OpenSource, Free, Some("Free"), High, Some(90), Excellent, High, None, Some(Commercial)),
    seed!(SearchEngine, "algolia", "Algolia", ManagedService, UsageBased, Some("Pay per 1,000 searches"), Low, Some(80), Excellent, Low, None, Some(Enterprise)),
    seed!(SearchEngine, "opensearch", "OpenSearch", OpenSource, Free, Some("Free"), High, Some(75), Good, High, None, Some(Community)),
    seed!(SearchEngine, "meilisearch", "Meilisearch", OpenSource, Free, Some("Free"), Low, Some(70), Good, Low, None, Some(Community)),
    seed!(SearchEngine, "typesense", "Typesense", OpenSource, Free, Some("Free"), Low, None, Good, Low, None, Some(Community)),

    // analytics
    seed!(Analytics, "google-analytics", "Google Analytics", ManagedService, Free, Some("Free"), Low, Some(95), Good, Low, GCP, Some(Commercial)),
    seed!(Analytics, "snowflake", "Snowflake", ManagedService, UsageBased, Some("Pay per credit"), High, Some(85), Excellent, High, None, Some(Enterprise)),
    seed!(Analytics, "bigquery", "Google BigQuery", ManagedService, UsageBased, Some("Pay per TiB scanned"), Medium, Some(82), Excellent, Medium, GCP, Some(Enterprise)),
    seed!(Analytics, "mixpanel", "Mixpanel", ManagedService, Freemium, Some("Free tier, Growth from $24/month"), Low, Some(78), Excellent, Low, None, Some(Commercial)),
    seed!(Analytics, "amplitude", "Amplitude", ManagedService, Freemium, Some("Free tier, Plus from $49/month"), Medium, Some(72), Good, Medium, None, Some(Commercial)),
    seed!(Analytics, "posthog", "PostHog", OpenSource, Freemium, Some("Free self-hosted"), Low, Some(68), Good, Low, None, Some(Community)),

    // load-balancer
    seed!(LoadBalancer, "nginx", "NGINX", OpenSource, Free, Some("Free"), Medium, Some(92), Excellent, Medium, None, Some(Community)),
    seed!(LoadBalancer, "aws-alb", "AWS Application Load Balancer", ManagedService, UsageBased, Some("Pay per LCU hour"), Low, Some(85), Excellent, Low, AWS, Some(Enterprise)),
    seed!(LoadBalancer, "haproxy", "HAProxy", OpenSource, Free, Some("Free"), Medium, Some(80), Good, Medium, None, Some(Commercial)),
    seed!(LoadBalancer, "traefik", "Traefik", OpenSource, Free, Some("Free"), Low, Some(72), Good, Low, None, Some(Community)),
    seed!(LoadBalancer, "gcp-load-balancing", "Google Cloud Load Balancing", ManagedService, UsageBased, Some("Pay per rule hour"), Low, Some(70), Good, Low, GCP, Some(Enterprise)),

    // cdn
    seed!(Cdn, "cloudflare", "Cloudflare CDN", ManagedService, Freemium, Some("Free tier, Pro $20/month"), Low, Some(92), Excellent, Low, None, Some(Enterprise)),
    seed!(Cdn, "amazon-cloudfront", "Amazon CloudFront", ManagedService, UsageBased, Some("Pay per GB transferred"), Medium, Some(85), Good, Medium, AWS, Some(Enterprise)),
    seed!(Cdn, "akamai", "Akamai", Commercial, Subscription, Some("$500/month"), High, Some(75), Good, High, None, Some(Enterprise)),
    seed!(Cdn, "fastly", "Fastly", ManagedService, UsageBased, Some("Pay per GB transferred"), Medium, Some(70), Good, Medium, None, Some(Enterprise)),

    // monitoring
    seed!(Monitoring, "prometheus", "Prometheus", OpenSource, Free, Some("Free"), Medium, Some(90), Excellent, Medium, None, Some(Community)),
    seed!(Monitoring, "grafana", "Grafana", OpenSource, Freemium, Some("Free self-hosted"), Low, Some(88), Excellent, Low, None, Some(Commercial)),
    seed!(Monitoring, "datadog", "Datadog", ManagedService, Subscription, Some("$15/host/month"), Low, Some(85), Excellent, Low, None, Some(Enterprise)),
    seed!(Monitoring, "amazon-cloudwatch", "Amazon CloudWatch", ManagedService, UsageBased, Some("Pay per metric"), Low, Some(80), Good, Low, AWS, Some(Enterprise)),
    seed!(Monitoring, "new-relic", "New Relic", ManagedService, Freemium, Some("100 GB/month free"), Low, Some(75), Good, Low, None, Some(Enterprise)),

    // api-gateway
    seed!(ApiGateway, "aws-api-gateway", "Amazon API Gateway", ManagedService, UsageBased, Some("Pay per million calls"), Low, Some(85), Good, Low, AWS, Some(Enterprise)),
    seed!(ApiGateway, "kong", "Kong Gateway", OpenSource, Freemium, Some("Free OSS edition"), Medium, Some(82), Excellent, Medium, None, Some(Commercial)),
    seed!(ApiGateway, "apigee", "Apigee", Commercial, Subscription, Some("$500/month"), High, Some(70), Good, High, GCP, Some(Enterprise)),
    seed!(ApiGateway, "azure-api-management", "Azure API Management", ManagedService, UsageBased, Some("Pay per unit hour"), Medium, Some(65), Good, Medium, AZURE, Some(Enterprise)),
    seed!(ApiGateway, "tyk", "Tyk", OpenSource, Freemium, Some("Free OSS edition"), Medium, Some(60), Good, Medium, None, Some(Commercial)),

    // logging
    seed!(Logging, "elk-stack", "ELK Stack", OpenSource, Free, Some("Free"), High, Some(85), Good, High, None, Some(Commercial)),
    seed!(Logging, "splunk", "Splunk", Commercial, Subscription, Some("$150/month"), High, Some(80), Excellent, High, None, Some(Enterprise)),
    seed!(Logging, "datadog-logs", "Datadog Log Management", ManagedService, UsageBased, Some("Pay per GB ingested"), Low, Some(78), Excellent, Low, None, Some(Enterprise)),
    seed!(Logging, "grafana-loki", "Grafana Loki", OpenSource, Free, Some("Free"), Medium, Some(75), Good, Medium, None, Some(Community)),
    seed!(Logging, "papertrail", "Papertrail", ManagedService, Freemium, Some("Free tier, plans from $7/month"), Low, Some(60), Good, Low, None, Some(Commercial)),
];
