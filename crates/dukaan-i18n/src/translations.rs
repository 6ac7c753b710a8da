//! UI translation table.
//!
//! Every UI string is a `TextKey` variant carrying both an English and an Urdu
//! rendering, so a missing translation is a compile error rather than a blank
//! label at runtime. String keys only exist at the edges (`TextKey::from_key`
//! and `lookup`) for callers that receive keys as data.

use crate::Language;
use std::borrow::Cow;

/// Macro to generate the translation table.
macro_rules! define_translations {
    ($( $variant:ident => $key:literal, $en:literal, $ur:literal; )+) => {
        /// A translatable UI string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $( $variant, )+
        }

        impl TextKey {
            /// Every key in the table.
            pub const ALL: &'static [TextKey] = &[ $( TextKey::$variant, )+ ];

            /// The string key (e.g., "addToCart").
            pub fn key(&self) -> &'static str {
                match self {
                    $( TextKey::$variant => $key, )+
                }
            }

            /// The English rendering.
            pub fn en(&self) -> &'static str {
                match self {
                    $( TextKey::$variant => $en, )+
                }
            }

            /// The Urdu rendering.
            pub fn ur(&self) -> &'static str {
                match self {
                    $( TextKey::$variant => $ur, )+
                }
            }

            /// Resolve a string key.
            pub fn from_key(key: &str) -> Option<TextKey> {
                match key {
                    $( $key => Some(TextKey::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

define_translations! {
    // Navigation
    Home => "home", "Home", "ہوم";
    Shop => "shop", "Shop", "دکان";
    Categories => "categories", "Categories", "اقسام";
    Deals => "deals", "Deals", "پیشکشیں";
    Cart => "cart", "Cart", "ٹوکری";
    Account => "account", "My Account", "میرا اکاؤنٹ";

    // Search & filters
    Search => "search", "Search products...", "مصنوعات تلاش کریں...";
    Filter => "filter", "Filter", "فلٹر";
    SortBy => "sortBy", "Sort by", "ترتیب دیں";
    PriceRange => "priceRange", "Price Range", "قیمت کی حد";
    Featured => "featured", "Featured", "نمایاں";
    PriceLowToHigh => "priceLowToHigh", "Price: Low to High", "قیمت: کم سے زیادہ";
    PriceHighToLow => "priceHighToLow", "Price: High to Low", "قیمت: زیادہ سے کم";
    Newest => "newest", "Newest", "جدید ترین";
    CustomerRating => "customerRating", "Customer Rating", "ریٹنگ";
    SearchResults => "searchResults", "Search Results", "تلاش کے نتائج";
    NoResults => "noResults", "No products found", "کوئی مصنوعات نہیں ملیں";

    // Product
    AddToCart => "addToCart", "Add to Cart", "ٹوکری میں ڈالیں";
    BuyNow => "buyNow", "Buy Now", "ابھی خریدیں";
    OutOfStock => "outOfStock", "Out of Stock", "ختم";
    InStock => "inStock", "In Stock", "دستیاب";
    Price => "price", "Price", "قیمت";
    Quantity => "quantity", "Quantity", "مقدار";
    Description => "description", "Description", "تفصیلات";
    Specifications => "specifications", "Specifications", "خصوصیات";
    Reviews => "reviews", "Reviews", "جائزے";

    // Cart & checkout
    Total => "total", "Total", "کل";
    Subtotal => "subtotal", "Subtotal", "ذیلی کل";
    Shipping => "shipping", "Shipping", "ڈیلیوری";
    Tax => "tax", "Tax", "ٹیکس";
    Free => "free", "Free", "مفت";
    Checkout => "checkout", "Proceed to Checkout", "چیک آؤٹ کریں";
    EmptyCart => "emptyCart", "Your cart is empty", "آپ کی ٹوکری خالی ہے";
    ContinueShopping => "continueShopping", "Continue Shopping", "خریداری جاری رکھیں";
    SavedForLater => "savedForLater", "Saved for Later", "بعد کے لیے محفوظ";
    OrderSummary => "orderSummary", "Order Summary", "آرڈر کا خلاصہ";
    CashOnDelivery => "cashOnDelivery", "Cash on Delivery", "ڈیلیوری پر ادائیگی";
    CardPayment => "cardPayment", "Credit/Debit Card", "کریڈٹ/ڈیبٹ کارڈ";
    BankTransfer => "bankTransfer", "Bank Transfer", "بینک ٹرانسفر";

    // Forms
    FirstName => "firstName", "First Name", "پہلا نام";
    LastName => "lastName", "Last Name", "آخری نام";
    Email => "email", "Email", "ای میل";
    Phone => "phone", "Phone", "فون";
    Address => "address", "Address", "پتہ";
    City => "city", "City", "شہر";
    State => "state", "State", "صوبہ";
    ZipCode => "zipCode", "ZIP Code", "پوسٹل کوڈ";

    // Messages
    AddedToCart => "addedToCart", "Added to cart successfully!", "ٹوکری میں کامیابی سے شامل!";
    RemovedFromCart => "removedFromCart", "Removed from cart", "ٹوکری سے ہٹا دیا";
    OrderPlaced => "orderPlaced", "Order placed successfully!", "آرڈر کامیابی سے دیا گیا!";
    ErrorOccurred => "errorOccurred", "An error occurred", "کوئی خرابی ہوئی";
    TryAgain => "tryAgain", "Try Again", "دوبارہ کوشش کریں";

    // Common
    Save => "save", "Save", "محفوظ کریں";
    Cancel => "cancel", "Cancel", "منسوخ";
    Confirm => "confirm", "Confirm", "تصدیق";
    Remove => "remove", "Remove", "ہٹائیں";
    Edit => "edit", "Edit", "ترمیم";
    Update => "update", "Update", "اپڈیٹ";
    Back => "back", "Back", "واپس";
    Next => "next", "Next", "اگلا";
    Loading => "loading", "Loading...", "لوڈ ہو رہا...";

    // Categories
    Electronics => "electronics", "Electronics", "الیکٹرانکس";
    Clothing => "clothing", "Clothing", "کپڑے";
    HomeGarden => "homeGarden", "Home & Garden", "گھر اور باغ";
    Books => "books", "Books", "کتابیں";
    Sports => "sports", "Sports", "کھیل";
    Beauty => "beauty", "Beauty", "خوبصورتی";
    Grocery => "grocery", "Grocery", "گروسری";
    Automotive => "automotive", "Automotive", "گاڑیاں";

    // Footer
    AboutUs => "aboutUs", "About Us", "ہمارے بارے میں";
    ContactUs => "contactUs", "Contact Us", "رابطہ کریں";
    PrivacyPolicy => "privacyPolicy", "Privacy Policy", "رازداری کی پالیسی";
    TermsOfService => "termsOfService", "Terms of Service", "خدمات کی شرائط";
    FollowUs => "followUs", "Follow Us", "ہمیں فالو کریں";
    PaymentMethods => "paymentMethods", "Payment Methods", "ادائیگی کے طریقے";

    // Language toggle
    SwitchToUrdu => "switchToUrdu", "اردو", "اردو";
    SwitchToEnglish => "switchToEnglish", "English", "English";

    // Hero section
    HeroTitle => "heroTitle", "Shop Smart, Shop Global", "ہوشیاری سے خریداری، عالمی معیار";
    HeroSubtitle => "heroSubtitle", "Discover amazing products with seamless bilingual experience", "دو زبانوں میں شاندار مصنوعات دریافت کریں";
    ShopNow => "shopNow", "Shop Now", "ابھی خریدیں";

    // Product statuses
    Sale => "sale", "Sale", "سیل";
    New => "new", "New", "نیا";
    Bestseller => "bestseller", "Best Seller", "بہترین";
    LimitedOffer => "limitedOffer", "Limited Offer", "محدود پیشکش";

    // Deals
    MegaDeals => "megaDeals", "Mega Deals", "میگا ڈیل";
    FlashSale => "flashSale", "Flash Sale", "فلیش سیل";
    Clearance => "clearance", "Clearance", "کلیئرنس";

    // Order status
    StatusReceived => "statusReceived", "Order Received", "آرڈر موصول";
    StatusProcessing => "statusProcessing", "Processing", "زیر عمل";
    StatusShipped => "statusShipped", "Shipped", "روانہ";
    StatusDelivered => "statusDelivered", "Delivered", "پہنچا دیا گیا";
    StatusCancelled => "statusCancelled", "Cancelled", "منسوخ شدہ";
}

impl TextKey {
    /// Get the rendering for a language.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en(),
            Language::Ur => self.ur(),
        }
    }
}

/// Translate a key.
pub fn t(key: TextKey, language: Language) -> &'static str {
    key.get(language)
}

/// Translate a string key, displaying the raw key when it is unknown.
pub fn lookup(key: &str, language: Language) -> Cow<'_, str> {
    match TextKey::from_key(key) {
        Some(k) => Cow::Borrowed(k.get(language)),
        None => Cow::Borrowed(key),
    }
}
