use crate::enrich::EnrichedPackage;

/// Table header. The last column links to the JavaScript integrations
/// landing page.
const TABLE_HEADER: &str = "| Provider | Package | Downloads | Latest | [JS](https://js.langchain.com/docs/integrations/platforms/) |\n| :--- | :---: | :---: | :---: | :---: |\n";

/// Renders the package table, most-downloaded first.
///
/// The sort is stable: packages with equal download counts keep their
/// registry order.
pub fn render_table(packages: &[EnrichedPackage]) -> String {
    let mut sorted: Vec<&EnrichedPackage> = packages.iter().collect();
    sorted.sort_by(|a, b| b.downloads.cmp(&a.downloads));

    let rows: Vec<String> = sorted.into_iter().map(render_row).collect();
    format!("{}{}", TABLE_HEADER, rows.join("\n"))
}

fn render_row(package: &EnrichedPackage) -> String {
    let js = if package.js_exists { "✅" } else { "❌" };
    let provider = match package.provider_page.as_deref() {
        Some(page) => format!("[{}]({})", package.name_title, page),
        None => package.name_title.clone(),
    };
    format!(
        "| {} | [{}]({}) | ![Downloads](https://static.pepy.tech/badge/{}/month) | ![PyPI - Version](https://img.shields.io/pypi/v/{}?style=flat-square&label=%20&color=orange) | {} |",
        provider, package.name, package.package_url, package.name, package.name, js
    )
}
