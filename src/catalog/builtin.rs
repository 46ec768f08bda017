//! The shipped data set: DigitalOcean-style components, the customer
//! roster and the standard and premium scenario pools.

use serde_json::json;

use super::component::{ComponentCategory, ComponentRecord};
use super::customer::Customer;
use super::registry::{ComponentCatalog, CustomerRoster, ScenarioBook};
use super::scenario::Scenario;
use crate::core::Result;

/// Build the shipped component catalog.
pub fn components() -> Result<ComponentCatalog> {
    let mut catalog = ComponentCatalog::new();
    for record in component_records() {
        catalog.register(record)?;
    }
    Ok(catalog)
}

/// Build the shipped customer roster.
pub fn customers() -> Result<CustomerRoster> {
    let mut roster = CustomerRoster::new();
    for customer in customer_profiles() {
        roster.register(customer)?;
    }
    Ok(roster)
}

/// Build the shipped scenario book (standard and premium pools).
pub fn scenarios() -> Result<ScenarioBook> {
    let mut book = ScenarioBook::new();
    for scenario in standard_scenarios().into_iter().chain(premium_scenarios()) {
        book.register(scenario)?;
    }
    Ok(book)
}

fn component_records() -> Vec<ComponentRecord> {
    vec![
        ComponentRecord::new("droplet-basic", "Droplet (Basic)", ComponentCategory::Compute)
            .with_icon("💧")
            .with_monthly_cost(5)
            .with_description("1 vCPU, 1GB RAM")
            .with_terraform("digitalocean_droplet", json!({"image": "ubuntu-22-04-x64", "size": "s-1vcpu-1gb", "region": "nyc3"})),
        ComponentRecord::new("droplet-general", "Droplet (General)", ComponentCategory::Compute)
            .with_icon("💧")
            .with_monthly_cost(20)
            .with_description("2 vCPU, 4GB RAM")
            .with_terraform("digitalocean_droplet", json!({"image": "ubuntu-22-04-x64", "size": "s-2vcpu-4gb", "region": "nyc3"})),
        ComponentRecord::new("droplet-cpu", "Droplet (CPU)", ComponentCategory::Compute)
            .with_icon("⚡")
            .with_monthly_cost(40)
            .with_description("4 vCPU, 8GB RAM")
            .with_terraform("digitalocean_droplet", json!({"image": "ubuntu-22-04-x64", "size": "c-4", "region": "nyc3"})),
        ComponentRecord::new("droplet-memory", "Droplet (Memory)", ComponentCategory::Compute)
            .with_icon("🧠")
            .with_monthly_cost(60)
            .with_description("2 vCPU, 16GB RAM")
            .with_terraform("digitalocean_droplet", json!({"image": "ubuntu-22-04-x64", "size": "m-2vcpu-16gb", "region": "nyc3"})),
        ComponentRecord::new("app-platform", "App Platform", ComponentCategory::Compute)
            .with_icon("📦")
            .with_monthly_cost(12)
            .with_description("Managed deployment")
            .with_terraform("digitalocean_app", json!({"spec": {"name": "app", "region": "nyc"}})),
        ComponentRecord::new("kubernetes", "Kubernetes", ComponentCategory::Compute)
            .with_icon("☸️")
            .with_monthly_cost(50)
            .with_description("Managed K8s cluster")
            .with_terraform("digitalocean_kubernetes_cluster", json!({"region": "nyc3", "version": "1.28.2-do.0", "node_pool": {"name": "worker-pool", "size": "s-2vcpu-4gb", "node_count": 3}})),
        ComponentRecord::new("spaces", "Spaces", ComponentCategory::Storage)
            .with_icon("📁")
            .with_monthly_cost(5)
            .with_description("250GB object storage")
            .with_terraform("digitalocean_spaces_bucket", json!({"region": "nyc3", "acl": "private"})),
        ComponentRecord::new("block-storage", "Block Storage", ComponentCategory::Storage)
            .with_icon("💾")
            .with_monthly_cost(10)
            .with_description("100GB volume")
            .with_terraform("digitalocean_volume", json!({"region": "nyc3", "size": 100, "filesystem_type": "ext4"})),
        ComponentRecord::new("postgres", "PostgreSQL", ComponentCategory::Database)
            .with_icon("🐘")
            .with_monthly_cost(15)
            .with_description("Managed PostgreSQL")
            .with_terraform("digitalocean_database_cluster", json!({"engine": "pg", "version": "15", "size": "db-s-1vcpu-1gb", "region": "nyc3", "node_count": 1})),
        ComponentRecord::new("mysql", "MySQL", ComponentCategory::Database)
            .with_icon("🐬")
            .with_monthly_cost(15)
            .with_description("Managed MySQL")
            .with_terraform("digitalocean_database_cluster", json!({"engine": "mysql", "version": "8", "size": "db-s-1vcpu-1gb", "region": "nyc3", "node_count": 1})),
        ComponentRecord::new("redis", "Redis", ComponentCategory::Database)
            .with_icon("🔴")
            .with_monthly_cost(15)
            .with_description("Managed cache")
            .with_terraform("digitalocean_database_cluster", json!({"engine": "redis", "version": "7", "size": "db-s-1vcpu-1gb", "region": "nyc3", "node_count": 1})),
        ComponentRecord::new("mongodb", "MongoDB", ComponentCategory::Database)
            .with_icon("🍃")
            .with_monthly_cost(15)
            .with_description("Managed document DB")
            .with_terraform("digitalocean_database_cluster", json!({"engine": "mongodb", "version": "6", "size": "db-s-1vcpu-1gb", "region": "nyc3", "node_count": 1})),
        ComponentRecord::new("load-balancer", "Load Balancer", ComponentCategory::Networking)
            .with_icon("⚖️")
            .with_monthly_cost(12)
            .with_description("Traffic distribution")
            .with_terraform("digitalocean_loadbalancer", json!({"region": "nyc3", "forwarding_rule": {"entry_port": 443, "entry_protocol": "https", "target_port": 80, "target_protocol": "http"}})),
        ComponentRecord::new("vpc", "VPC", ComponentCategory::Networking)
            .with_icon("🔒")
            .with_monthly_cost(0)
            .with_description("Private network")
            .with_terraform("digitalocean_vpc", json!({"region": "nyc3", "ip_range": "10.10.10.0/24"})),
        ComponentRecord::new("floating-ip", "Floating IP", ComponentCategory::Networking)
            .with_icon("🌐")
            .with_monthly_cost(5)
            .with_description("Static IP address")
            .with_terraform("digitalocean_floating_ip", json!({"region": "nyc3"})),
        ComponentRecord::new("cdn", "CDN", ComponentCategory::Networking)
            .with_icon("🚀")
            .with_monthly_cost(5)
            .with_description("Content delivery")
            .with_terraform("digitalocean_cdn", json!({"origin": "spaces-origin"})),
        ComponentRecord::new("firewall", "Firewall", ComponentCategory::Networking)
            .with_icon("🛡️")
            .with_monthly_cost(0)
            .with_description("Security rules")
            .with_terraform("digitalocean_firewall", json!({"inbound_rule": {"protocol": "tcp", "port_range": "22", "source_addresses": ["0.0.0.0/0"]}})),
        ComponentRecord::new("container-registry", "Container Registry", ComponentCategory::Other)
            .with_icon("📋")
            .with_monthly_cost(5)
            .with_description("Docker images")
            .with_terraform("digitalocean_container_registry", json!({"subscription_tier_slug": "basic"})),
        ComponentRecord::new("functions", "Functions", ComponentCategory::Other)
            .with_icon("λ")
            .with_monthly_cost(2)
            .with_description("Serverless compute")
            .with_terraform("digitalocean_app", json!({"spec": {"name": "functions", "service": {"name": "function", "source_dir": "/"}}})),
        ComponentRecord::new("monitoring", "Monitoring", ComponentCategory::Other)
            .with_icon("📊")
            .with_monthly_cost(0)
            .with_description("Metrics & alerts")
            .with_terraform("digitalocean_monitor_alert", json!({"type": "v1/insights/droplet/cpu", "compare": "GreaterThan", "value": 80})),
    ]
}

fn customer_profiles() -> Vec<Customer> {
    vec![
        Customer::new("amd", "AMD")
            .with_branding("🔺", "#ED1C24")
            .with_patience(3)
            .with_tip_multiplier(1.2)
            .with_personality("We need precision engineering here. Our Ryzen workloads demand optimal configurations."),
        Customer::new("amazon", "Amazon")
            .with_branding("📦", "#FF9900")
            .with_patience(2)
            .with_tip_multiplier(1.0)
            .with_personality("Time is money. We need this infrastructure deployed yesterday!"),
        Customer::new("meta", "Meta")
            .with_branding("Ⓜ️", "#0668E1")
            .with_patience(4)
            .with_tip_multiplier(1.5)
            .with_personality("We're building for billions of users. Scale is everything."),
        Customer::new("netflix", "Netflix")
            .with_branding("🎬", "#E50914")
            .with_patience(3)
            .with_tip_multiplier(1.3)
            .with_personality("Our viewers expect 4K streaming without buffering. Make it happen!"),
        Customer::new("spotify", "Spotify")
            .with_branding("🎵", "#1DB954")
            .with_patience(4)
            .with_tip_multiplier(1.4)
            .with_personality("Music needs to flow seamlessly. Low latency is our jam!"),
        Customer::new("shopify", "Shopify")
            .with_branding("🛒", "#96BF48")
            .with_patience(3)
            .with_tip_multiplier(1.2)
            .with_personality("Black Friday is coming. We need an infrastructure that won't buckle!"),
        Customer::new("stripe", "Stripe")
            .with_branding("💳", "#635BFF")
            .with_patience(2)
            .with_tip_multiplier(1.1)
            .with_personality("Payment processing requires bulletproof security and uptime."),
        Customer::new("uber", "Uber")
            .with_branding("🚗", "#000000")
            .with_patience(2)
            .with_tip_multiplier(1.0)
            .with_personality("Riders are waiting! We need real-time location services NOW."),
        Customer::new("airbnb", "Airbnb")
            .with_branding("🏠", "#FF5A5F")
            .with_patience(4)
            .with_tip_multiplier(1.3)
            .with_personality("Our guests deserve a seamless booking experience worldwide."),
        Customer::new("slack", "Slack")
            .with_branding("💬", "#4A154B")
            .with_patience(3)
            .with_tip_multiplier(1.2)
            .with_personality("Real-time messaging for millions of teams. WebSockets are life!"),
        Customer::new("discord", "Discord")
            .with_branding("🎮", "#5865F2")
            .with_patience(3)
            .with_tip_multiplier(1.3)
            .with_personality("Gamers demand low ping. Voice chat can't lag!"),
        Customer::new("twitch", "Twitch")
            .with_branding("📺", "#9146FF")
            .with_patience(2)
            .with_tip_multiplier(1.2)
            .with_personality("Live streaming means LIVE. No buffer, no delay, no excuses!"),
    ]
}

fn standard_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("web-app", "Web Application Stack", 400)
            .with_description("We need a scalable web app with database backend.")
            .with_description("Build us a production-ready web application infrastructure.")
            .with_description("Set up our new SaaS platform with proper data persistence.")
            .requires("droplet-general", 2)
            .requires("load-balancer", 1)
            .requires("postgres", 1)
            .requires("spaces", 1),
        Scenario::new("microservices", "Microservices Platform", 500)
            .with_description("Build us a containerized microservices setup.")
            .with_description("We're going cloud-native! Set up our container orchestration.")
            .with_description("Our monolith needs to become microservices. Container time!")
            .requires("kubernetes", 1)
            .requires("container-registry", 1)
            .requires("redis", 1)
            .requires("load-balancer", 1),
        Scenario::new("data-pipeline", "Data Pipeline", 550)
            .with_description("We need real-time data processing infrastructure.")
            .with_description("Build us a high-throughput data ingestion system.")
            .with_description("Our analytics platform needs serious compute power.")
            .requires("droplet-cpu", 3)
            .requires("mongodb", 1)
            .requires("redis", 1)
            .requires("block-storage", 1),
        Scenario::new("static-site", "Static Website with CDN", 200)
            .with_description("Simple marketing site with global delivery.")
            .with_description("We need a blazing fast static site for our landing pages.")
            .with_description("Set up our docs site with worldwide CDN distribution.")
            .requires("spaces", 1)
            .requires("cdn", 1)
            .requires("floating-ip", 1),
        Scenario::new("api-backend", "API Backend", 450)
            .with_description("RESTful API with caching and storage.")
            .with_description("Build our mobile app backend infrastructure.")
            .with_description("We need a robust API layer for our services.")
            .requires("droplet-general", 2)
            .requires("postgres", 1)
            .requires("redis", 1)
            .requires("load-balancer", 1),
        Scenario::new("ml-platform", "Machine Learning Platform", 600)
            .with_description("Infrastructure for ML model training and serving.")
            .with_description("We're training AI models. Need serious compute!")
            .with_description("Build our MLOps pipeline infrastructure.")
            .requires("droplet-cpu", 2)
            .requires("droplet-memory", 1)
            .requires("block-storage", 1)
            .requires("spaces", 1),
        Scenario::new("ecommerce", "E-commerce Platform", 550)
            .with_description("Full e-commerce with payments and inventory.")
            .with_description("Black Friday is coming! Build us a scalable store.")
            .with_description("Set up our online marketplace infrastructure.")
            .requires("droplet-general", 2)
            .requires("postgres", 1)
            .requires("redis", 1)
            .requires("load-balancer", 1)
            .requires("spaces", 1),
        Scenario::new("realtime-chat", "Real-time Chat System", 500)
            .with_description("WebSocket-based messaging infrastructure.")
            .with_description("Build us a Slack competitor! Real-time is key.")
            .with_description("We need chat infrastructure for millions of users.")
            .requires("droplet-memory", 2)
            .requires("redis", 1)
            .requires("mongodb", 1)
            .requires("load-balancer", 1),
        Scenario::new("cicd", "CI/CD Pipeline", 350)
            .with_description("Continuous integration and deployment setup.")
            .with_description("Automate our deployments! Build a proper pipeline.")
            .with_description("We need DevOps infrastructure for our team.")
            .requires("droplet-general", 1)
            .requires("container-registry", 1)
            .requires("spaces", 1)
            .requires("functions", 1),
        Scenario::new("gaming", "Gaming Backend", 600)
            .with_description("Multiplayer game server infrastructure.")
            .with_description("Gamers hate lag! Build us low-latency servers.")
            .with_description("Set up our esports tournament infrastructure.")
            .requires("droplet-cpu", 3)
            .requires("redis", 1)
            .requires("postgres", 1)
            .requires("load-balancer", 1),
        Scenario::new("video-streaming", "Video Streaming Platform", 650)
            .with_description("Build us the next Netflix! Streaming infrastructure needed.")
            .with_description("Our content needs to reach millions of viewers smoothly.")
            .with_description("Set up video transcoding and delivery infrastructure.")
            .requires("droplet-cpu", 2)
            .requires("spaces", 1)
            .requires("cdn", 1)
            .requires("load-balancer", 1)
            .requires("redis", 1),
        Scenario::new("iot-platform", "IoT Platform", 500)
            .with_description("Millions of sensors need a home. Build our IoT backend!")
            .with_description("Smart devices everywhere! We need real-time data ingestion.")
            .with_description("Set up our industrial IoT monitoring platform.")
            .requires("droplet-general", 2)
            .requires("mongodb", 1)
            .requires("redis", 1)
            .requires("functions", 1)
            .requires("monitoring", 1),
    ]
}

// Harder builds with much bigger payouts.
fn premium_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("enterprise-hybrid-cloud", "Enterprise Hybrid Cloud", 1200)
            .premium()
            .with_description("Build us a full hybrid cloud setup with on-prem integration!")
            .with_description("We need enterprise-grade multi-region infrastructure.")
            .with_description("Set up our global infrastructure with complete redundancy.")
            .requires("kubernetes", 2)
            .requires("droplet-cpu", 4)
            .requires("postgres", 2)
            .requires("redis", 2)
            .requires("load-balancer", 2)
            .requires("spaces", 1)
            .requires("monitoring", 1),
        Scenario::new("global-cdn-platform", "Global CDN Platform", 1000)
            .premium()
            .with_description("Worldwide content delivery for billions of users!")
            .with_description("Build us a planetary-scale CDN infrastructure.")
            .with_description("We need ultra-low latency content delivery everywhere.")
            .requires("cdn", 3)
            .requires("spaces", 3)
            .requires("droplet-general", 3)
            .requires("load-balancer", 2)
            .requires("redis", 1),
        Scenario::new("ai-training-cluster", "AI Training Cluster", 1300)
            .premium()
            .with_description("Train our foundation models! We need MASSIVE compute.")
            .with_description("Build infrastructure for training GPT-level AI models.")
            .with_description("Set up our AI research cluster with petabytes of storage.")
            .requires("droplet-cpu", 5)
            .requires("droplet-memory", 3)
            .requires("block-storage", 3)
            .requires("spaces", 2)
            .requires("monitoring", 1),
        Scenario::new("financial-trading-platform", "Financial Trading Platform", 1400)
            .premium()
            .with_description("Microseconds matter! Build ultra-low-latency trading infrastructure.")
            .with_description("We need NYSE-grade infrastructure for high-frequency trading.")
            .with_description("Set up our quantitative trading platform with zero downtime.")
            .requires("droplet-cpu", 4)
            .requires("postgres", 2)
            .requires("redis", 3)
            .requires("load-balancer", 2)
            .requires("monitoring", 1)
            .requires("vpc", 1)
            .requires("firewall", 1),
        Scenario::new("metaverse-platform", "Metaverse Platform", 1250)
            .premium()
            .with_description("Build the infrastructure for the next internet!")
            .with_description("We need real-time 3D rendering for millions of avatars.")
            .with_description("Set up our virtual world with seamless social experiences.")
            .requires("kubernetes", 1)
            .requires("droplet-cpu", 4)
            .requires("droplet-memory", 2)
            .requires("redis", 2)
            .requires("mongodb", 1)
            .requires("load-balancer", 2)
            .requires("spaces", 2),
        Scenario::new("quantum-computing-gateway", "Quantum Computing Gateway", 1100)
            .premium()
            .with_description("Interface classical systems with quantum computers!")
            .with_description("Build infrastructure to manage quantum algorithm execution.")
            .with_description("We need hybrid classical-quantum computing infrastructure.")
            .requires("droplet-memory", 4)
            .requires("droplet-cpu", 3)
            .requires("postgres", 1)
            .requires("redis", 2)
            .requires("functions", 2)
            .requires("monitoring", 1),
    ]
}
