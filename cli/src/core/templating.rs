//! # Dev Templating
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Renders the two files `dev` generates: the support-services compose
//! definition (rewritten on every startup) and the DNS resolver file written by
//! `dev init-dns`. Both are small Tera templates filled from `Config`, so the
//! images, domain and nameserver can be changed without touching the code.
//!
use crate::core::config::Config;
use crate::core::error::{DevError, Result};
use anyhow::anyhow;
use tera::{Context, Tera};
use tracing::debug;

/// Compose definition for the reverse proxy and the DNS forwarder.
const SUPPORT_SERVICES_TEMPLATE: &str = r#"nginx:
  image: {{ proxy_image }}
  ports:
    - "80:80"
  volumes:
    - /var/run/docker.sock:/tmp/docker.sock:ro
  restart: always
dnsmasq:
  image: {{ dns_image }}
  ports:
    - "{{ loopback }}:53:53/tcp"
    - "{{ loopback }}:53:53/udp"
  cap_add:
    - NET_ADMIN
  command: --address=/{{ domain }}/{{ loopback }}
  restart: always
"#;

const RESOLVER_TEMPLATE: &str = "nameserver {{ nameserver }}\n";

/// Renders the support-services compose file content.
pub fn render_support_services(config: &Config) -> Result<String> {
    let services = &config.support_services;
    let mut context = Context::new();
    context.insert("proxy_image", &services.proxy_image);
    context.insert("dns_image", &services.dns_image);
    context.insert("domain", &services.domain);
    context.insert("loopback", &services.loopback);
    render("support_services.yml", SUPPORT_SERVICES_TEMPLATE, &context)
}

/// Renders the resolver file content.
pub fn render_resolver(config: &Config) -> Result<String> {
    let mut context = Context::new();
    context.insert("nameserver", &config.resolver.nameserver);
    render("resolver", RESOLVER_TEMPLATE, &context)
}

fn render(name: &str, template: &str, context: &Context) -> Result<String> {
    debug!("Rendering template '{}'", name);
    // Autoescape is off: these are YAML/plain text, not HTML.
    Tera::one_off(template, context, false).map_err(|e| {
        anyhow!(DevError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })
}
