//! The fixed aggregation query and the table names it touches.

/// Purchases fact table, one row per purchase line.
pub const PURCHASES_TABLE: &str = "purchases";
/// Sales fact table, one row per sale line.
pub const SALES_TABLE: &str = "sales";
/// Per-invoice freight charges.
pub const VENDOR_INVOICE_TABLE: &str = "vendor_invoice";
/// Brand-level reference prices and volumes.
pub const PURCHASE_PRICES_TABLE: &str = "purchase_prices";
/// Output table, replaced by every summary build.
pub const SUMMARY_TABLE: &str = "vendor_sales_summary";

/// Reconciles three grains into one row per (VendorNumber, Brand):
/// per-vendor freight totals, per-vendor-brand purchase totals and
/// per-vendor-brand sales totals.
///
/// PurchaseSummary drives the final projection, so its grains all survive
/// the two left joins; vendors or brands with no sales or freight come
/// back with NULL aggregates for the cleaning stage to zero out. Purchase
/// rows priced at or below zero, and rows whose brand has no entry in the
/// price reference, never enter the summary.
pub const VENDOR_SUMMARY_SQL: &str = "
WITH FreightSummary AS (
    SELECT
        VendorNumber,
        SUM(Freight) AS FreightCost
    FROM vendor_invoice
    GROUP BY VendorNumber
),

PurchaseSummary AS (
    SELECT
        p.VendorNumber,
        p.VendorName,
        p.Brand,
        p.Description,
        p.PurchasePrice,
        pp.Price AS ActualPrice,
        pp.Volume,
        SUM(p.Quantity) AS TotalPurchaseQuantity,
        SUM(p.Dollars) AS TotalPurchaseDollars
    FROM purchases p
    JOIN purchase_prices pp
        ON p.Brand = pp.Brand
    WHERE p.PurchasePrice > 0
    GROUP BY
        p.VendorNumber,
        p.VendorName,
        p.Brand,
        p.Description,
        p.PurchasePrice,
        pp.Price,
        pp.Volume
),

SalesSummary AS (
    SELECT
        VendorNo,
        Brand,
        SUM(SalesDollars) AS TotalSalesDollars,
        SUM(SalesPrice) AS TotalSalesPrice,
        SUM(SalesQuantity) AS TotalSalesQuantity,
        SUM(ExciseTax) AS TotalExciseTax
    FROM sales
    GROUP BY VendorNo, Brand
)

SELECT
    ps.VendorNumber,
    ps.VendorName,
    ps.Brand,
    ps.Description,
    ps.PurchasePrice,
    ps.ActualPrice,
    ps.Volume,
    ps.TotalPurchaseQuantity,
    ps.TotalPurchaseDollars,
    ss.TotalSalesQuantity,
    ss.TotalSalesDollars,
    ss.TotalSalesPrice,
    ss.TotalExciseTax,
    fs.FreightCost
FROM PurchaseSummary ps
LEFT JOIN SalesSummary ss
    ON ps.VendorNumber = ss.VendorNo AND ps.Brand = ss.Brand
LEFT JOIN FreightSummary fs
    ON ps.VendorNumber = fs.VendorNumber
ORDER BY ps.TotalPurchaseDollars DESC
";
