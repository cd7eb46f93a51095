use serde::Serialize;

/// Aggregate export document. Key casing follows the CloudFront API
/// responses the document is assembled from, so a dump diffs cleanly against
/// the console or the AWS CLI.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExportDocument {
    pub distribution_id: String,
    pub origins: Vec<OriginRecord>,
    pub default_cache_behavior: Vec<BehaviorRecord>,
    pub additional_cache_behaviors: Vec<BehaviorRecord>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OriginRecord {
    pub id: String,
    pub domain_name: String,
    pub origin_path: Option<String>,
    pub custom_headers: Option<Vec<CustomHeaderRecord>>,
    pub custom_origin_config: Option<CustomOriginConfigRecord>,
    pub s3_origin_config: Option<S3OriginConfigRecord>,
    pub connection_attempts: Option<i32>,
    pub connection_timeout: Option<i32>,
    pub origin_shield: Option<OriginShieldRecord>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomHeaderRecord {
    pub header_name: String,
    pub header_value: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomOriginConfigRecord {
    #[serde(rename = "HTTPPort")]
    pub http_port: i32,
    #[serde(rename = "HTTPSPort")]
    pub https_port: i32,
    pub origin_protocol_policy: String,
    pub origin_ssl_protocols: Option<Vec<String>>,
    pub origin_read_timeout: Option<i32>,
    pub origin_keepalive_timeout: Option<i32>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct S3OriginConfigRecord {
    pub origin_access_identity: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OriginShieldRecord {
    pub enabled: bool,
    pub origin_shield_region: Option<String>,
}

/// One routing rule. The default behavior carries no path pattern on the
/// wire and is rendered as `Default (*)`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BehaviorRecord {
    pub path_pattern: String,
    pub target_origin_id: String,
    pub viewer_protocol_policy: String,
    pub allowed_methods: Option<Vec<String>>,
    pub cached_methods: Option<Vec<String>>,
    pub compress: Option<bool>,
    pub lambda_function_associations: Option<Vec<LambdaFunctionAssociationRecord>>,
    pub function_associations: Option<Vec<FunctionAssociationRecord>>,
    pub field_level_encryption_id: Option<String>,
    pub cache_policy: Option<PolicyResolution<CachePolicyRecord>>,
    pub origin_request_policy: Option<PolicyResolution<OriginRequestPolicyRecord>>,
    pub response_headers_policy: Option<PolicyResolution<ResponseHeadersPolicyRecord>>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaFunctionAssociationRecord {
    #[serde(rename = "LambdaFunctionARN")]
    pub lambda_function_arn: String,
    pub event_type: String,
    pub include_body: Option<bool>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionAssociationRecord {
    #[serde(rename = "FunctionARN")]
    pub function_arn: String,
    pub event_type: String,
}

/// Outcome of looking up one referenced policy. A behavior with no
/// identifier for a policy kind never reaches this type (the field stays
/// `None` and serializes as `null`); a lookup the provider rejects degrades
/// to the inline error marker instead of failing the export.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PolicyResolution<T> {
    Resolved(T),
    Failed(PolicyError),
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PolicyError {
    pub error: String,
}

impl<T: NamedPolicy> PolicyResolution<T> {
    /// Display name for the summary table. Failed lookups have none; the
    /// JSON error marker is the authoritative signal for those.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            PolicyResolution::Resolved(policy) => policy.name(),
            PolicyResolution::Failed(_) => None,
        }
    }
}

pub trait NamedPolicy {
    fn name(&self) -> Option<&str>;
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CachePolicyRecord {
    pub id: String,
    pub last_modified_time: String,
    #[serde(rename = "CachePolicyConfig")]
    pub config: Option<CachePolicyConfigRecord>,
}

impl NamedPolicy for CachePolicyRecord {
    fn name(&self) -> Option<&str> {
        self.config.as_ref().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CachePolicyConfigRecord {
    pub name: String,
    pub comment: Option<String>,
    #[serde(rename = "DefaultTTL")]
    pub default_ttl: Option<i64>,
    #[serde(rename = "MaxTTL")]
    pub max_ttl: Option<i64>,
    #[serde(rename = "MinTTL")]
    pub min_ttl: i64,
    pub parameters_in_cache_key_and_forwarded_to_origin: Option<CacheKeyParametersRecord>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CacheKeyParametersRecord {
    pub enable_accept_encoding_gzip: bool,
    pub enable_accept_encoding_brotli: Option<bool>,
    pub headers_config: Option<KeyListRecord>,
    pub cookies_config: Option<KeyListRecord>,
    pub query_strings_config: Option<KeyListRecord>,
}

/// Header/cookie/query-string selection shared by cache and origin-request
/// policies: a behavior mode plus the flattened name list.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct KeyListRecord {
    pub behavior: String,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OriginRequestPolicyRecord {
    pub id: String,
    pub last_modified_time: String,
    #[serde(rename = "OriginRequestPolicyConfig")]
    pub config: Option<OriginRequestPolicyConfigRecord>,
}

impl NamedPolicy for OriginRequestPolicyRecord {
    fn name(&self) -> Option<&str> {
        self.config.as_ref().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OriginRequestPolicyConfigRecord {
    pub name: String,
    pub comment: Option<String>,
    pub headers_config: Option<KeyListRecord>,
    pub cookies_config: Option<KeyListRecord>,
    pub query_strings_config: Option<KeyListRecord>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseHeadersPolicyRecord {
    pub id: String,
    pub last_modified_time: String,
    #[serde(rename = "ResponseHeadersPolicyConfig")]
    pub config: Option<ResponseHeadersPolicyConfigRecord>,
}

impl NamedPolicy for ResponseHeadersPolicyRecord {
    fn name(&self) -> Option<&str> {
        self.config.as_ref().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseHeadersPolicyConfigRecord {
    pub name: String,
    pub comment: Option<String>,
    pub custom_headers: Option<Vec<ResponseHeaderRecord>>,
    pub remove_headers: Option<Vec<String>>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseHeaderRecord {
    pub header: String,
    pub value: String,
    pub r#override: bool,
}
