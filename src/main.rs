use eyre::Result;
use watch_catalog::{telemetry, Config, SiteClient, Stripe};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(&config.log_filter);

    let client = SiteClient::new(config.base_url.clone())?;

    let products = client.products().await;
    if products.is_empty() {
        println!("No products found");
    }
    for product in &products {
        println!("{}", product.title());
        if let Some(image) = product.image_url() {
            println!("  image: {image}");
        }
        let colours = product.colours();
        if !colours.is_empty() {
            println!("  colours: {}", colours.join(" | "));
        }
        for (index, spec) in product.display_specs(&config.labels).iter().enumerate() {
            let marker = match Stripe::for_row(index) {
                Stripe::Even => ' ',
                Stripe::Odd => '·',
            };
            println!("  {marker} {:<20} {}", spec.label, spec.value);
        }
    }

    for card in client.cards().await {
        println!(
            "{} ({})",
            card.name.as_deref().unwrap_or_default(),
            card.title.as_deref().unwrap_or_default()
        );
        if let Some(href) = card.detail_href() {
            println!("  page: {href}");
        }
        for row in card.contact_rows() {
            let shown = row.href.as_deref().unwrap_or(&row.value);
            println!("  {:<10} {shown}", row.kind.label());
        }
        for link in card.social_links() {
            println!("  {:<10} {}", link.kind.label(), link.url);
        }
        if !card.skills.is_empty() {
            println!("  skills: {}", card.skills.join(", "));
        }
    }
    Ok(())
}
