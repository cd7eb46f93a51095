use aws_sdk_cloudfront::types::{
    AllowedMethods, CacheBehavior, CachePolicy, CachedMethods, CookieNames, CustomHeaders, CustomOriginConfig,
    DefaultCacheBehavior, FunctionAssociations, Headers, LambdaFunctionAssociations, Origin, OriginRequestPolicy,
    Origins, ParametersInCacheKeyAndForwardedToOrigin, QueryStringNames, ResponseHeadersPolicy,
};

use crate::document::{
    BehaviorRecord, CacheKeyParametersRecord, CachePolicyConfigRecord, CachePolicyRecord, CustomHeaderRecord,
    CustomOriginConfigRecord, FunctionAssociationRecord, KeyListRecord, LambdaFunctionAssociationRecord,
    OriginRecord, OriginRequestPolicyConfigRecord, OriginRequestPolicyRecord, OriginShieldRecord,
    ResponseHeaderRecord, ResponseHeadersPolicyConfigRecord, ResponseHeadersPolicyRecord, S3OriginConfigRecord,
};
use crate::table::BehaviorRow;
use crate::{table, util};

use super::Exporter;

/// Label for the default behavior, which carries no path pattern on the wire.
pub(crate) const DEFAULT_PATH_PATTERN: &str = "Default (*)";

pub(crate) fn origin_records(origins: &Origins) -> Vec<OriginRecord> {
    origins.items.iter().map(origin_record).collect()
}

fn origin_record(origin: &Origin) -> OriginRecord {
    OriginRecord {
        id: origin.id.clone(),
        domain_name: origin.domain_name.clone(),
        origin_path: origin.origin_path.clone(),
        custom_headers: origin.custom_headers.as_ref().and_then(custom_header_records),
        custom_origin_config: origin.custom_origin_config.as_ref().map(custom_origin_config_record),
        s3_origin_config: origin.s3_origin_config.as_ref().map(|config| S3OriginConfigRecord {
            origin_access_identity: config.origin_access_identity.clone(),
        }),
        connection_attempts: origin.connection_attempts,
        connection_timeout: origin.connection_timeout,
        origin_shield: origin.origin_shield.as_ref().map(|shield| OriginShieldRecord {
            enabled: shield.enabled,
            origin_shield_region: shield.origin_shield_region.clone(),
        }),
    }
}

fn custom_header_records(headers: &CustomHeaders) -> Option<Vec<CustomHeaderRecord>> {
    headers.items.as_ref().map(|items| {
        items
            .iter()
            .map(|header| CustomHeaderRecord {
                header_name: header.header_name.clone(),
                header_value: header.header_value.clone(),
            })
            .collect()
    })
}

fn custom_origin_config_record(config: &CustomOriginConfig) -> CustomOriginConfigRecord {
    CustomOriginConfigRecord {
        http_port: config.http_port,
        https_port: config.https_port,
        origin_protocol_policy: config.origin_protocol_policy.as_str().to_string(),
        origin_ssl_protocols: config
            .origin_ssl_protocols
            .as_ref()
            .map(|protocols| protocols.items.iter().map(|p| p.as_str().to_string()).collect()),
        origin_read_timeout: config.origin_read_timeout,
        origin_keepalive_timeout: config.origin_keepalive_timeout,
    }
}

impl Exporter {
    /// Assemble the record for the distribution's default behavior, resolving
    /// its policy references. A row is appended only when a sink is supplied.
    pub(crate) async fn default_behavior_record(
        &self,
        behavior: &DefaultCacheBehavior,
        rows: Option<&mut Vec<BehaviorRow>>,
    ) -> BehaviorRecord {
        let mut record = BehaviorRecord {
            path_pattern: String::from(DEFAULT_PATH_PATTERN),
            target_origin_id: behavior.target_origin_id.clone(),
            viewer_protocol_policy: behavior.viewer_protocol_policy.as_str().to_string(),
            allowed_methods: behavior.allowed_methods.as_ref().map(allowed_method_names),
            cached_methods: behavior
                .allowed_methods
                .as_ref()
                .and_then(|methods| methods.cached_methods.as_ref())
                .map(cached_method_names),
            compress: behavior.compress,
            lambda_function_associations: behavior
                .lambda_function_associations
                .as_ref()
                .and_then(lambda_association_records),
            function_associations: behavior.function_associations.as_ref().and_then(function_association_records),
            field_level_encryption_id: behavior.field_level_encryption_id.clone(),
            cache_policy: None,
            origin_request_policy: None,
            response_headers_policy: None,
        };

        self.attach_policies(
            &mut record,
            behavior.cache_policy_id.as_deref(),
            behavior.origin_request_policy_id.as_deref(),
            behavior.response_headers_policy_id.as_deref(),
        )
        .await;

        if let Some(rows) = rows {
            rows.push(table::summary_row(&record));
        }

        record
    }

    /// Same as [`Self::default_behavior_record`], for one of the additional
    /// path-pattern behaviors.
    pub(crate) async fn behavior_record(
        &self,
        behavior: &CacheBehavior,
        rows: Option<&mut Vec<BehaviorRow>>,
    ) -> BehaviorRecord {
        let mut record = BehaviorRecord {
            path_pattern: behavior.path_pattern.clone(),
            target_origin_id: behavior.target_origin_id.clone(),
            viewer_protocol_policy: behavior.viewer_protocol_policy.as_str().to_string(),
            allowed_methods: behavior.allowed_methods.as_ref().map(allowed_method_names),
            cached_methods: behavior
                .allowed_methods
                .as_ref()
                .and_then(|methods| methods.cached_methods.as_ref())
                .map(cached_method_names),
            compress: behavior.compress,
            lambda_function_associations: behavior
                .lambda_function_associations
                .as_ref()
                .and_then(lambda_association_records),
            function_associations: behavior.function_associations.as_ref().and_then(function_association_records),
            field_level_encryption_id: behavior.field_level_encryption_id.clone(),
            cache_policy: None,
            origin_request_policy: None,
            response_headers_policy: None,
        };

        self.attach_policies(
            &mut record,
            behavior.cache_policy_id.as_deref(),
            behavior.origin_request_policy_id.as_deref(),
            behavior.response_headers_policy_id.as_deref(),
        )
        .await;

        if let Some(rows) = rows {
            rows.push(table::summary_row(&record));
        }

        record
    }

    async fn attach_policies(
        &self,
        record: &mut BehaviorRecord,
        cache_policy_id: Option<&str>,
        origin_request_policy_id: Option<&str>,
        response_headers_policy_id: Option<&str>,
    ) {
        record.cache_policy = self.resolve_cache_policy(cache_policy_id).await;
        record.origin_request_policy = self.resolve_origin_request_policy(origin_request_policy_id).await;
        record.response_headers_policy = self.resolve_response_headers_policy(response_headers_policy_id).await;
    }
}

fn allowed_method_names(methods: &AllowedMethods) -> Vec<String> {
    methods.items.iter().map(|method| method.as_str().to_string()).collect()
}

fn cached_method_names(methods: &CachedMethods) -> Vec<String> {
    methods.items.iter().map(|method| method.as_str().to_string()).collect()
}

fn lambda_association_records(associations: &LambdaFunctionAssociations) -> Option<Vec<LambdaFunctionAssociationRecord>> {
    associations.items.as_ref().map(|items| {
        items
            .iter()
            .map(|association| LambdaFunctionAssociationRecord {
                lambda_function_arn: association.lambda_function_arn.clone(),
                event_type: association.event_type.as_str().to_string(),
                include_body: association.include_body,
            })
            .collect()
    })
}

fn function_association_records(associations: &FunctionAssociations) -> Option<Vec<FunctionAssociationRecord>> {
    associations.items.as_ref().map(|items| {
        items
            .iter()
            .map(|association| FunctionAssociationRecord {
                function_arn: association.function_arn.clone(),
                event_type: association.event_type.as_str().to_string(),
            })
            .collect()
    })
}

pub(crate) fn cache_policy_record(policy: &CachePolicy) -> CachePolicyRecord {
    CachePolicyRecord {
        id: policy.id.clone(),
        last_modified_time: util::iso8601(&policy.last_modified_time),
        config: policy.cache_policy_config.as_ref().map(|config| CachePolicyConfigRecord {
            name: config.name.clone(),
            comment: config.comment.clone(),
            default_ttl: config.default_ttl,
            max_ttl: config.max_ttl,
            min_ttl: config.min_ttl,
            parameters_in_cache_key_and_forwarded_to_origin: config
                .parameters_in_cache_key_and_forwarded_to_origin
                .as_ref()
                .map(cache_key_parameters_record),
        }),
    }
}

fn cache_key_parameters_record(params: &ParametersInCacheKeyAndForwardedToOrigin) -> CacheKeyParametersRecord {
    CacheKeyParametersRecord {
        enable_accept_encoding_gzip: params.enable_accept_encoding_gzip,
        enable_accept_encoding_brotli: params.enable_accept_encoding_brotli,
        headers_config: params.headers_config.as_ref().map(|config| KeyListRecord {
            behavior: config.header_behavior.as_str().to_string(),
            items: header_names(config.headers.as_ref()),
        }),
        cookies_config: params.cookies_config.as_ref().map(|config| KeyListRecord {
            behavior: config.cookie_behavior.as_str().to_string(),
            items: cookie_names(config.cookies.as_ref()),
        }),
        query_strings_config: params.query_strings_config.as_ref().map(|config| KeyListRecord {
            behavior: config.query_string_behavior.as_str().to_string(),
            items: query_string_names(config.query_strings.as_ref()),
        }),
    }
}

pub(crate) fn origin_request_policy_record(policy: &OriginRequestPolicy) -> OriginRequestPolicyRecord {
    OriginRequestPolicyRecord {
        id: policy.id.clone(),
        last_modified_time: util::iso8601(&policy.last_modified_time),
        config: policy
            .origin_request_policy_config
            .as_ref()
            .map(|config| OriginRequestPolicyConfigRecord {
                name: config.name.clone(),
                comment: config.comment.clone(),
                headers_config: config.headers_config.as_ref().map(|headers| KeyListRecord {
                    behavior: headers.header_behavior.as_str().to_string(),
                    items: header_names(headers.headers.as_ref()),
                }),
                cookies_config: config.cookies_config.as_ref().map(|cookies| KeyListRecord {
                    behavior: cookies.cookie_behavior.as_str().to_string(),
                    items: cookie_names(cookies.cookies.as_ref()),
                }),
                query_strings_config: config.query_strings_config.as_ref().map(|query_strings| KeyListRecord {
                    behavior: query_strings.query_string_behavior.as_str().to_string(),
                    items: query_string_names(query_strings.query_strings.as_ref()),
                }),
            }),
    }
}

pub(crate) fn response_headers_policy_record(policy: &ResponseHeadersPolicy) -> ResponseHeadersPolicyRecord {
    ResponseHeadersPolicyRecord {
        id: policy.id.clone(),
        last_modified_time: util::iso8601(&policy.last_modified_time),
        config: policy
            .response_headers_policy_config
            .as_ref()
            .map(|config| ResponseHeadersPolicyConfigRecord {
                name: config.name.clone(),
                comment: config.comment.clone(),
                custom_headers: config
                    .custom_headers_config
                    .as_ref()
                    .and_then(|headers| headers.items.as_ref())
                    .map(|items| {
                        items
                            .iter()
                            .map(|header| ResponseHeaderRecord {
                                header: header.header.clone(),
                                value: header.value.clone(),
                                r#override: header.r#override,
                            })
                            .collect()
                    }),
                remove_headers: config
                    .remove_headers_config
                    .as_ref()
                    .and_then(|headers| headers.items.as_ref())
                    .map(|items| items.iter().map(|header| header.header.clone()).collect()),
            }),
    }
}

fn header_names(headers: Option<&Headers>) -> Vec<String> {
    headers.and_then(|headers| headers.items.clone()).unwrap_or_default()
}

fn cookie_names(cookies: Option<&CookieNames>) -> Vec<String> {
    cookies.and_then(|cookies| cookies.items.clone()).unwrap_or_default()
}

fn query_string_names(query_strings: Option<&QueryStringNames>) -> Vec<String> {
    query_strings.and_then(|names| names.items.clone()).unwrap_or_default()
}
