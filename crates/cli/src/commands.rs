use crate::Command;
use anyhow::Context;
use netaddr_application::services::{
    resolve_blocking, reverse_blocking, AccessControlService, ResolveFlags, Resolver,
};
use netaddr_domain::{parse_addr_port, parse_subnet, subnet_contains, AddressRecord, Config};
use std::sync::Arc;
use tracing::debug;

pub async fn run(command: Command, config: &Config, resolver: Arc<Resolver>) -> anyhow::Result<()> {
    match command {
        Command::Parse { token } => {
            let parts = parse_addr_port(&token)?;
            println!("host:  {}", parts.host.as_deref().unwrap_or("-"));
            println!("scope: {}", parts.scope_id.as_deref().unwrap_or("-"));
            match parts.port {
                Some(port) => println!("port:  {port}"),
                None => println!("port:  -"),
            }
        }

        Command::Resolve {
            host,
            family,
            port,
            service,
            numeric,
        } => {
            let port = match service.as_deref() {
                Some(name) => resolver.service_port(Some(name))?,
                None => port.unwrap_or(config.resolver.default_port),
            };
            let flags = ResolveFlags {
                numeric_host: numeric,
            };

            let mut resolution = resolve_blocking(resolver, host, family, port, flags).await?;
            if let Some(name) = service.as_deref() {
                resolution.set_service(name, port);
            }
            for record in &resolution {
                println!("{}\t{}\t{}", record.family(), record.ip_string(), record.port());
            }
        }

        Command::Reverse { ip, allow_numeric } => {
            let record = AddressRecord::parse_literal(&ip, 0)?;
            let record = reverse_blocking(resolver, record, !allow_numeric)
                .await
                .with_context(|| format!("reverse lookup of {ip}"))?;
            println!("{}", record.hostname().unwrap_or_default());
        }

        Command::Service { name } => {
            println!("{}", resolver.service_port(Some(&name))?);
        }

        Command::Subnet { ip, mask } => {
            let subnet = parse_subnet(&ip, mask.as_deref())?;
            println!("{subnet}\t{}\tmask {}", subnet.family(), subnet.mask());
        }

        Command::Match { subnet, ip, mask } => {
            let subnet = parse_subnet(&subnet, mask.as_deref())?;
            let record = AddressRecord::parse_literal(&ip, 0)?;
            let matched = subnet_contains(&subnet, &record);
            debug!(%subnet, address = %record.ip_string(), matched, "Subnet test");
            println!("{}", if matched { "match" } else { "no match" });
        }

        Command::Access { ip } => {
            let service = Arc::new(AccessControlService::new(resolver));
            service.refresh(config)?;

            let mut record = AddressRecord::parse_literal(&ip, 0)?;
            let group = tokio::task::spawn_blocking(move || service.find_group(&mut record))
                .await
                .context("access lookup task failed")?;
            match group {
                Some(group) => println!("group {group}"),
                None => println!("no match"),
            }
        }
    }

    Ok(())
}
