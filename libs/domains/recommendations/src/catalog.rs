//! Static provider catalog.
//!
//! The catalog is seeded once at startup and shared read-only. Its order is
//! the input order for recommendation ranking, so ties keep seed order.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    ComputeTier, DatabaseTier, PricingMultipliers, Provider, ProviderServices, SetupComplexity,
    StorageKind, StorageOffering, SupportQuality,
};

/// Immutable, validated set of providers
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
}

impl ProviderCatalog {
    /// Validate and wrap a provider list.
    ///
    /// Every provider must have a unique id and at least one compute tier.
    pub fn new(providers: Vec<Provider>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for provider in &providers {
            if !seen.insert(provider.id.as_str()) {
                return Err(CatalogError::DuplicateProvider(provider.id.clone()));
            }
            if provider.services.compute.is_empty() {
                return Err(CatalogError::NoComputeTiers(provider.id.clone()));
            }
        }

        Ok(Self { providers })
    }

    /// Catalog built from the embedded seed dataset
    pub fn seed() -> CatalogResult<Self> {
        let catalog = Self::new(seed_providers())?;
        tracing::info!(providers = catalog.len(), "Loaded provider catalog");
        Ok(catalog)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn get(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn compute(name: &str, instance_type: &str, vcpu: f64, memory: f64, price_per_hour: f64) -> ComputeTier {
    ComputeTier {
        name: name.to_string(),
        instance_type: instance_type.to_string(),
        vcpu,
        memory,
        price_per_hour,
    }
}

fn storage(name: &str, kind: StorageKind, price_per_gb: f64) -> StorageOffering {
    StorageOffering {
        name: name.to_string(),
        kind,
        price_per_gb,
    }
}

fn database(name: &str, engine: &str, price_per_hour: f64) -> DatabaseTier {
    DatabaseTier {
        name: name.to_string(),
        engine: engine.to_string(),
        price_per_hour,
    }
}

fn pricing(compute_multiplier: f64, storage_multiplier: f64, network_multiplier: f64) -> PricingMultipliers {
    PricingMultipliers {
        compute_multiplier,
        storage_multiplier,
        network_multiplier,
    }
}

/// Seed dataset of supported cloud providers
pub fn seed_providers() -> Vec<Provider> {
    use StorageKind::{Block, Object};

    vec![
        Provider {
            id: "aws".to_string(),
            name: "aws".to_string(),
            display_name: "Amazon Web Services".to_string(),
            logo: "fab fa-aws".to_string(),
            description: "Comprehensive cloud platform with the largest market share".to_string(),
            regions: strings(&["us-east-1", "us-west-2", "eu-west-1", "ap-southeast-1", "ap-northeast-1"]),
            services: ProviderServices {
                compute: vec![
                    compute("EC2 t3.micro", "t3.micro", 2.0, 1.0, 0.0104),
                    compute("EC2 t3.small", "t3.small", 2.0, 2.0, 0.0208),
                    compute("EC2 t3.medium", "t3.medium", 2.0, 4.0, 0.0416),
                    compute("EC2 t3.large", "t3.large", 2.0, 8.0, 0.0832),
                ],
                storage: vec![
                    storage("EBS gp3", Block, 0.08),
                    storage("S3 Standard", Object, 0.023),
                ],
                database: vec![
                    database("RDS MySQL db.t3.micro", "mysql", 0.017),
                    database("RDS MySQL db.t3.small", "mysql", 0.034),
                ],
            },
            pricing: pricing(1.0, 1.0, 1.0),
            strengths: strings(&["Largest ecosystem", "Mature services", "Global reach", "Enterprise features"]),
            weaknesses: strings(&["Complex pricing", "Steep learning curve", "Can be expensive"]),
            best_for: strings(&["Enterprise applications", "Complex architectures", "Global deployment"]),
            setup_complexity: SetupComplexity::Medium,
            support_quality: SupportQuality::Excellent,
            compliance: strings(&["SOC2", "ISO27001", "HIPAA", "GDPR", "PCI-DSS"]),
        },
        Provider {
            id: "gcp".to_string(),
            name: "gcp".to_string(),
            display_name: "Google Cloud Platform".to_string(),
            logo: "fab fa-google".to_string(),
            description: "Google's cloud platform with strong AI/ML and data analytics".to_string(),
            regions: strings(&["us-central1", "us-east1", "europe-west1", "asia-east1", "australia-southeast1"]),
            services: ProviderServices {
                compute: vec![
                    compute("Compute Engine e2-micro", "e2-micro", 1.0, 1.0, 0.008),
                    compute("Compute Engine e2-small", "e2-small", 1.0, 2.0, 0.016),
                    compute("Compute Engine e2-medium", "e2-medium", 1.0, 4.0, 0.033),
                    compute("Compute Engine e2-standard-2", "e2-standard-2", 2.0, 8.0, 0.067),
                ],
                storage: vec![
                    storage("Persistent Disk", Block, 0.04),
                    storage("Cloud Storage Standard", Object, 0.02),
                ],
                database: vec![
                    database("Cloud SQL MySQL db-f1-micro", "mysql", 0.015),
                    database("Cloud SQL MySQL db-g1-small", "mysql", 0.025),
                ],
            },
            pricing: pricing(0.9, 0.8, 0.85),
            strengths: strings(&["Competitive pricing", "Strong AI/ML", "Good performance", "Sustainable"]),
            weaknesses: strings(&["Smaller ecosystem", "Less enterprise features", "Regional coverage"]),
            best_for: strings(&["Data analytics", "AI/ML workloads", "Cost optimization"]),
            setup_complexity: SetupComplexity::Easy,
            support_quality: SupportQuality::Good,
            compliance: strings(&["SOC2", "ISO27001", "HIPAA", "GDPR"]),
        },
        Provider {
            id: "azure".to_string(),
            name: "azure".to_string(),
            display_name: "Microsoft Azure".to_string(),
            logo: "fab fa-microsoft".to_string(),
            description: "Microsoft's cloud platform with strong enterprise integration".to_string(),
            regions: strings(&["eastus", "westus2", "westeurope", "southeastasia", "australiaeast"]),
            services: ProviderServices {
                compute: vec![
                    compute("B1s", "B1s", 1.0, 1.0, 0.0104),
                    compute("B2s", "B2s", 2.0, 4.0, 0.0416),
                    compute("B4ms", "B4ms", 4.0, 16.0, 0.166),
                ],
                storage: vec![
                    storage("Managed Disk Premium", Block, 0.135),
                    storage("Blob Storage", Object, 0.0208),
                ],
                database: vec![
                    database("SQL Database Basic", "mssql", 0.007),
                    database("SQL Database S0", "mssql", 0.02),
                ],
            },
            pricing: pricing(1.05, 1.1, 1.0),
            strengths: strings(&["Microsoft integration", "Hybrid cloud", "Enterprise features", "Good support"]),
            weaknesses: strings(&["Higher pricing", "Windows-centric", "Learning curve"]),
            best_for: strings(&["Microsoft shops", "Enterprise", "Hybrid deployments"]),
            setup_complexity: SetupComplexity::Medium,
            support_quality: SupportQuality::Excellent,
            compliance: strings(&["SOC2", "ISO27001", "HIPAA", "GDPR", "FedRAMP"]),
        },
        Provider {
            id: "digitalocean".to_string(),
            name: "digitalocean".to_string(),
            display_name: "DigitalOcean".to_string(),
            logo: "fas fa-server".to_string(),
            description: "Developer-friendly cloud platform with simple pricing".to_string(),
            regions: strings(&["nyc1", "sfo2", "ams3", "sgp1", "fra1"]),
            services: ProviderServices {
                compute: vec![
                    compute("Basic Droplet 1GB", "s-1vcpu-1gb", 1.0, 1.0, 0.007),
                    compute("Basic Droplet 2GB", "s-1vcpu-2gb", 1.0, 2.0, 0.015),
                    compute("Basic Droplet 4GB", "s-2vcpu-4gb", 2.0, 4.0, 0.030),
                ],
                storage: vec![
                    storage("Block Storage", Block, 0.10),
                    storage("Spaces Object Storage", Object, 0.02),
                ],
                database: vec![
                    database("Managed MySQL Basic", "mysql", 0.022),
                    database("Managed MySQL Professional", "mysql", 0.045),
                ],
            },
            pricing: pricing(0.7, 0.9, 0.8),
            strengths: strings(&["Simple pricing", "Developer friendly", "Great UX", "Predictable costs"]),
            weaknesses: strings(&["Limited enterprise features", "Fewer regions", "Basic compliance"]),
            best_for: strings(&["Startups", "Simple applications", "Cost-conscious projects"]),
            setup_complexity: SetupComplexity::Easy,
            support_quality: SupportQuality::Good,
            compliance: strings(&["SOC2", "GDPR"]),
        },
        Provider {
            id: "linode".to_string(),
            name: "linode".to_string(),
            display_name: "Linode".to_string(),
            logo: "fas fa-cloud".to_string(),
            description: "High-performance cloud platform with competitive pricing".to_string(),
            regions: strings(&["us-east", "us-west", "eu-west", "ap-south", "ap-northeast"]),
            services: ProviderServices {
                compute: vec![
                    compute("Nanode 1GB", "g6-nanode-1", 1.0, 1.0, 0.007),
                    compute("Linode 2GB", "g6-standard-1", 1.0, 2.0, 0.015),
                    compute("Linode 4GB", "g6-standard-2", 2.0, 4.0, 0.030),
                ],
                storage: vec![
                    storage("Block Storage", Block, 0.10),
                    storage("Object Storage", Object, 0.02),
                ],
                database: vec![database("Managed MySQL", "mysql", 0.022)],
            },
            pricing: pricing(0.75, 0.85, 0.8),
            strengths: strings(&["High performance", "Competitive pricing", "Good support", "Simple interface"]),
            weaknesses: strings(&["Smaller ecosystem", "Limited enterprise features", "Fewer regions"]),
            best_for: strings(&["High-performance apps", "Cost optimization", "Growing companies"]),
            setup_complexity: SetupComplexity::Easy,
            support_quality: SupportQuality::Good,
            compliance: strings(&["SOC2", "GDPR"]),
        },
        Provider {
            id: "ibm".to_string(),
            name: "ibm".to_string(),
            display_name: "IBM Cloud".to_string(),
            logo: "fas fa-cloud".to_string(),
            description: "Enterprise-focused cloud platform with strong AI and hybrid cloud capabilities".to_string(),
            regions: strings(&["us-east", "us-south", "eu-gb", "eu-de", "jp-tok", "au-syd"]),
            services: ProviderServices {
                compute: vec![
                    compute("Virtual Server bx2-2x8", "bx2-2x8", 2.0, 8.0, 0.095),
                    compute("Virtual Server bx2-4x16", "bx2-4x16", 4.0, 16.0, 0.190),
                ],
                storage: vec![
                    storage("Block Storage", Block, 0.10),
                    storage("Object Storage", Object, 0.023),
                ],
                database: vec![database("Databases for MySQL", "mysql", 0.030)],
            },
            pricing: pricing(1.15, 1.0, 1.05),
            strengths: strings(&["Enterprise integration", "AI/ML services", "Hybrid cloud", "Security focus"]),
            weaknesses: strings(&["Higher pricing", "Complex interface", "Limited regions"]),
            best_for: strings(&["Enterprise applications", "AI/ML workloads", "Hybrid deployments"]),
            setup_complexity: SetupComplexity::Hard,
            support_quality: SupportQuality::Excellent,
            compliance: strings(&["SOC2", "ISO27001", "HIPAA", "GDPR", "FedRAMP"]),
        },
        Provider {
            id: "oracle".to_string(),
            name: "oracle".to_string(),
            display_name: "Oracle Cloud".to_string(),
            logo: "fas fa-database".to_string(),
            description: "Database-focused cloud platform with strong enterprise features".to_string(),
            regions: strings(&["us-ashburn-1", "us-phoenix-1", "eu-frankfurt-1", "uk-london-1", "ap-tokyo-1"]),
            services: ProviderServices {
                compute: vec![
                    compute("VM.Standard2.1", "VM.Standard2.1", 1.0, 15.0, 0.0255),
                    compute("VM.Standard2.2", "VM.Standard2.2", 2.0, 30.0, 0.051),
                ],
                storage: vec![
                    storage("Block Volume", Block, 0.0255),
                    storage("Object Storage", Object, 0.025),
                ],
                database: vec![database("Autonomous Database", "oracle", 0.36)],
            },
            pricing: pricing(0.95, 0.9, 1.0),
            strengths: strings(&["Database expertise", "Autonomous features", "Good pricing", "Always Free tier"]),
            weaknesses: strings(&["Oracle-centric", "Smaller ecosystem", "Limited third-party integrations"]),
            best_for: strings(&["Database-heavy applications", "Oracle workloads", "Cost optimization"]),
            setup_complexity: SetupComplexity::Medium,
            support_quality: SupportQuality::Good,
            compliance: strings(&["SOC2", "ISO27001", "HIPAA", "GDPR"]),
        },
        Provider {
            id: "alibaba".to_string(),
            name: "alibaba".to_string(),
            display_name: "Alibaba Cloud".to_string(),
            logo: "fas fa-cloud-upload-alt".to_string(),
            description: "Leading cloud provider in Asia with strong presence in China".to_string(),
            regions: strings(&["cn-hangzhou", "cn-beijing", "us-east-1", "eu-central-1", "ap-southeast-1"]),
            services: ProviderServices {
                compute: vec![
                    compute("ECS t5-lc1m1.small", "t5-lc1m1.small", 1.0, 1.0, 0.009),
                    compute("ECS t5-lc1m2.small", "t5-lc1m2.small", 1.0, 2.0, 0.014),
                ],
                storage: vec![
                    storage("Enhanced SSD", Block, 0.08),
                    storage("Object Storage Service", Object, 0.02),
                ],
                database: vec![database("ApsaraDB RDS MySQL", "mysql", 0.022)],
            },
            pricing: pricing(0.8, 0.75, 0.85),
            strengths: strings(&["Asia-Pacific presence", "Competitive pricing", "Strong in China", "Good performance"]),
            weaknesses: strings(&["Language barriers", "Limited Western presence", "Compliance concerns"]),
            best_for: strings(&["Asia market", "Cost-sensitive projects", "China deployment"]),
            setup_complexity: SetupComplexity::Medium,
            support_quality: SupportQuality::Good,
            compliance: strings(&["ISO27001", "SOC2"]),
        },
        Provider {
            id: "hetzner".to_string(),
            name: "hetzner".to_string(),
            display_name: "Hetzner Cloud".to_string(),
            logo: "fas fa-server".to_string(),
            description: "German cloud provider known for excellent price-performance ratio".to_string(),
            regions: strings(&["nbg1", "fsn1", "hel1", "ash", "hil"]),
            services: ProviderServices {
                compute: vec![
                    compute("CX11", "cx11", 1.0, 4.0, 0.005),
                    compute("CX21", "cx21", 2.0, 8.0, 0.010),
                    compute("CX31", "cx31", 2.0, 8.0, 0.015),
                ],
                storage: vec![
                    storage("Local SSD", Block, 0.0476),
                    storage("Volume", Block, 0.0476),
                ],
                database: vec![],
            },
            pricing: pricing(0.6, 0.7, 0.5),
            strengths: strings(&["Excellent pricing", "High performance", "German engineering", "Simple interface"]),
            weaknesses: strings(&["Limited regions", "No managed databases", "Europe-focused"]),
            best_for: strings(&["Budget-conscious projects", "European users", "High-performance computing"]),
            setup_complexity: SetupComplexity::Easy,
            support_quality: SupportQuality::Good,
            compliance: strings(&["GDPR", "ISO27001"]),
        },
        Provider {
            id: "ovh".to_string(),
            name: "ovh".to_string(),
            display_name: "OVHcloud".to_string(),
            logo: "fas fa-cloud".to_string(),
            description: "European cloud provider with focus on data sovereignty".to_string(),
            regions: strings(&["GRA", "SBG", "WAW", "UK1", "DE1", "US-EAST", "US-WEST"]),
            services: ProviderServices {
                compute: vec![
                    compute("B2-7", "b2-7", 2.0, 7.0, 0.0056),
                    compute("B2-15", "b2-15", 4.0, 15.0, 0.0113),
                ],
                storage: vec![
                    storage("High Speed Volume", Block, 0.08),
                    storage("Object Storage", Object, 0.0115),
                ],
                database: vec![database("Public Cloud Databases", "mysql", 0.024)],
            },
            pricing: pricing(0.65, 0.8, 0.7),
            strengths: strings(&["European data centers", "GDPR compliance", "Competitive pricing", "Data sovereignty"]),
            weaknesses: strings(&["Limited global presence", "Interface complexity", "Smaller ecosystem"]),
            best_for: strings(&["European businesses", "GDPR compliance", "Data sovereignty requirements"]),
            setup_complexity: SetupComplexity::Medium,
            support_quality: SupportQuality::Good,
            compliance: strings(&["GDPR", "ISO27001", "SOC2"]),
        },
        Provider {
            id: "vultr".to_string(),
            name: "vultr".to_string(),
            display_name: "Vultr".to_string(),
            logo: "fas fa-cloud-upload-alt".to_string(),
            description: "High-performance cloud provider with global presence".to_string(),
            regions: strings(&["ewr", "ord", "dfw", "sea", "lax", "fra", "ams", "lon", "sgp", "nrt", "syd"]),
            services: ProviderServices {
                compute: vec![
                    compute("Regular 1GB", "vc2-1c-1gb", 1.0, 1.0, 0.007),
                    compute("Regular 2GB", "vc2-1c-2gb", 1.0, 2.0, 0.012),
                    compute("Regular 4GB", "vc2-2c-4gb", 2.0, 4.0, 0.024),
                ],
                storage: vec![
                    storage("NVMe Block Storage", Block, 0.10),
                    storage("Object Storage", Object, 0.02),
                ],
                database: vec![database("Managed Database", "mysql", 0.020)],
            },
            pricing: pricing(0.75, 0.85, 0.8),
            strengths: strings(&["High performance", "Global network", "SSD storage", "Developer-friendly"]),
            weaknesses: strings(&["Limited enterprise features", "Basic support", "No free tier"]),
            best_for: strings(&["Performance-critical apps", "Global deployment", "Developer projects"]),
            setup_complexity: SetupComplexity::Easy,
            support_quality: SupportQuality::Basic,
            compliance: strings(&["SOC2", "GDPR"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_valid() {
        let catalog = ProviderCatalog::seed().unwrap();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.providers()[0].id, "aws");
        assert_eq!(catalog.providers()[10].id, "vultr");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = ProviderCatalog::seed().unwrap();
        let hetzner = catalog.get("hetzner").unwrap();
        assert_eq!(hetzner.display_name, "Hetzner Cloud");
        assert!(hetzner.services.database.is_empty());
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_compute_tiers_are_ordered_by_capacity() {
        for provider in seed_providers() {
            for pair in provider.services.compute.windows(2) {
                assert!(
                    pair[1].vcpu >= pair[0].vcpu && pair[1].memory >= pair[0].memory,
                    "{} tiers out of order: {} before {}",
                    provider.id,
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }

    #[test]
    fn test_duplicate_provider_rejected() {
        let mut providers = seed_providers();
        providers.push(providers[0].clone());

        let result = ProviderCatalog::new(providers);
        assert!(matches!(result, Err(CatalogError::DuplicateProvider(id)) if id == "aws"));
    }

    #[test]
    fn test_provider_without_compute_rejected() {
        let mut providers = seed_providers();
        providers[3].services.compute.clear();

        let result = ProviderCatalog::new(providers);
        assert!(matches!(result, Err(CatalogError::NoComputeTiers(id)) if id == "digitalocean"));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = ProviderCatalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }
}
