//! Static company rosters of the known indices.

use crate::models::{Company, IndexDescriptor};

const fn company(symbol: &'static str, name: &'static str) -> Company {
    Company { symbol, name }
}

/// Sector labels drawn for generated constituents.
pub const SECTORS: [&str; 11] = [
    "Technology",
    "Healthcare",
    "Financials",
    "Consumer Discretionary",
    "Communication Services",
    "Industrials",
    "Consumer Staples",
    "Energy",
    "Utilities",
    "Materials",
    "Real Estate",
];

pub const SP500: &[Company] = &[
    company("AAPL", "Apple Inc."),
    company("MSFT", "Microsoft Corporation"),
    company("AMZN", "Amazon.com Inc."),
    company("NVDA", "NVIDIA Corporation"),
    company("GOOGL", "Alphabet Inc."),
    company("META", "Meta Platforms Inc."),
    company("TSLA", "Tesla, Inc."),
    company("BRK.B", "Berkshire Hathaway Inc."),
    company("UNH", "UnitedHealth Group Inc."),
    company("JNJ", "Johnson & Johnson"),
    company("JPM", "JPMorgan Chase & Co."),
    company("V", "Visa Inc."),
    company("PG", "Procter & Gamble Co."),
    company("MA", "Mastercard Inc."),
    company("HD", "Home Depot Inc."),
    company("CVX", "Chevron Corporation"),
    company("MRK", "Merck & Co. Inc."),
    company("ABBV", "AbbVie Inc."),
    company("PEP", "PepsiCo Inc."),
    company("KO", "Coca-Cola Company"),
    company("AVGO", "Broadcom Inc."),
    company("COST", "Costco Wholesale Corp."),
    company("TMO", "Thermo Fisher Scientific"),
    company("BAC", "Bank of America Corp."),
    company("LLY", "Eli Lilly and Company"),
];

pub const DOW_JONES: &[Company] = &[
    company("AAPL", "Apple Inc."),
    company("AMGN", "Amgen Inc."),
    company("AXP", "American Express Co."),
    company("BA", "Boeing Co."),
    company("CAT", "Caterpillar Inc."),
    company("CRM", "Salesforce Inc."),
    company("CSCO", "Cisco Systems Inc."),
    company("CVX", "Chevron Corporation"),
    company("DIS", "Walt Disney Co."),
    company("DOW", "Dow Inc."),
    company("GS", "Goldman Sachs Group Inc."),
    company("HD", "Home Depot Inc."),
    company("HON", "Honeywell International Inc."),
    company("IBM", "International Business Machines"),
    company("INTC", "Intel Corporation"),
    company("JNJ", "Johnson & Johnson"),
    company("JPM", "JPMorgan Chase & Co."),
    company("KO", "Coca-Cola Company"),
    company("MCD", "McDonald's Corporation"),
    company("MMM", "3M Company"),
    company("MRK", "Merck & Co. Inc."),
    company("MSFT", "Microsoft Corporation"),
    company("NKE", "Nike Inc."),
    company("PG", "Procter & Gamble Co."),
    company("TRV", "Travelers Companies Inc."),
    company("UNH", "UnitedHealth Group Inc."),
    company("V", "Visa Inc."),
    company("VZ", "Verizon Communications Inc."),
    company("WBA", "Walgreens Boots Alliance Inc."),
    company("WMT", "Walmart Inc."),
];

pub const NASDAQ: &[Company] = &[
    company("AAPL", "Apple Inc."),
    company("MSFT", "Microsoft Corporation"),
    company("AMZN", "Amazon.com Inc."),
    company("NVDA", "NVIDIA Corporation"),
    company("GOOGL", "Alphabet Inc. Class A"),
    company("GOOG", "Alphabet Inc. Class C"),
    company("META", "Meta Platforms Inc."),
    company("TSLA", "Tesla, Inc."),
    company("AVGO", "Broadcom Inc."),
    company("PEP", "PepsiCo Inc."),
    company("COST", "Costco Wholesale Corp."),
    company("ADBE", "Adobe Inc."),
    company("CSCO", "Cisco Systems Inc."),
    company("TMUS", "T-Mobile US Inc."),
    company("CMCSA", "Comcast Corporation"),
    company("NFLX", "Netflix Inc."),
    company("AMD", "Advanced Micro Devices Inc."),
    company("INTC", "Intel Corporation"),
    company("QCOM", "Qualcomm Inc."),
    company("INTU", "Intuit Inc."),
    company("AMAT", "Applied Materials Inc."),
    company("TXN", "Texas Instruments Inc."),
    company("PYPL", "PayPal Holdings Inc."),
    company("SBUX", "Starbucks Corporation"),
    company("ADI", "Analog Devices Inc."),
];

pub const RUSSELL_2000: &[Company] = &[
    company("ENSG", "The Ensign Group Inc."),
    company("MEDP", "Medpace Holdings Inc."),
    company("TTEK", "Tetra Tech Inc."),
    company("PODD", "Insulet Corporation"),
    company("EXEL", "Exelixis Inc."),
    company("SAIA", "Saia Inc."),
    company("LSTR", "Landstar System Inc."),
    company("AXON", "Axon Enterprise Inc."),
    company("BLDR", "Builders FirstSource Inc."),
    company("CGNX", "Cognex Corporation"),
    company("PNFP", "Pinnacle Financial Partners"),
    company("HALO", "Halozyme Therapeutics Inc."),
    company("KNSL", "Kinsale Capital Group Inc."),
    company("EWBC", "East West Bancorp Inc."),
    company("PCTY", "Paylocity Holding Corp."),
    company("SYNH", "Syneos Health Inc."),
    company("NATI", "National Instruments Corp."),
    company("AZPN", "Aspen Technology Inc."),
    company("QLYS", "Qualys Inc."),
    company("FOXF", "Fox Factory Holding Corp."),
    company("HOMB", "Home Bancshares Inc."),
    company("CATY", "Cathay General Bancorp"),
    company("CVLT", "Commvault Systems Inc."),
    company("COLB", "Columbia Banking System Inc."),
    company("FORM", "FormFactor Inc."),
];

/// Known indices in listing order.
pub static KNOWN_INDICES: [IndexDescriptor; 4] = [
    IndexDescriptor {
        symbol: "^GSPC",
        name: "S&P 500",
        roster: SP500,
    },
    IndexDescriptor {
        symbol: "^DJI",
        name: "Dow Jones",
        roster: DOW_JONES,
    },
    IndexDescriptor {
        symbol: "^IXIC",
        name: "NASDAQ",
        roster: NASDAQ,
    },
    IndexDescriptor {
        symbol: "^RUT",
        name: "Russell 2000",
        roster: RUSSELL_2000,
    },
];
