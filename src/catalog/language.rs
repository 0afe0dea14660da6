//! Language tags for `Accept-Language`

pub const COMMON: &[&str] = &[
    "en-US", "en", "en-GB", "de-DE", "de", "fr-FR", "fr", "es-ES", "es", "it-IT", "it",
    "pt-BR", "pt", "nl-NL", "nl", "pl-PL", "pl", "ru-RU", "ru", "uk-UA", "uk", "tr-TR", "tr",
    "ja-JP", "ja", "zh-CN", "zh", "ko-KR", "ko", "sv-SE", "sv",
];

pub const ALL: &[&str] = &[
    "af", "af-ZA", "am", "am-ET", "ar", "ar-AE", "ar-EG", "ar-SA", "az", "az-AZ", "be",
    "be-BY", "bg", "bg-BG", "bn", "bn-BD", "bn-IN", "bs", "bs-BA", "ca", "ca-ES", "cs",
    "cs-CZ", "cy", "cy-GB", "da", "da-DK", "de", "de-AT", "de-CH", "de-DE", "el", "el-GR",
    "en", "en-AU", "en-CA", "en-GB", "en-IE", "en-IN", "en-NZ", "en-US", "en-ZA", "es",
    "es-AR", "es-CL", "es-CO", "es-ES", "es-MX", "es-US", "et", "et-EE", "eu", "eu-ES", "fa",
    "fa-IR", "fi", "fi-FI", "fil", "fil-PH", "fr", "fr-BE", "fr-CA", "fr-CH", "fr-FR", "ga",
    "ga-IE", "gl", "gl-ES", "gu", "gu-IN", "he", "he-IL", "hi", "hi-IN", "hr", "hr-HR", "hu",
    "hu-HU", "hy", "hy-AM", "id", "id-ID", "is", "is-IS", "it", "it-CH", "it-IT", "ja",
    "ja-JP", "ka", "ka-GE", "kk", "kk-KZ", "km", "km-KH", "kn", "kn-IN", "ko", "ko-KR", "lo",
    "lo-LA", "lt", "lt-LT", "lv", "lv-LV", "mk", "mk-MK", "ml", "ml-IN", "mn", "mn-MN", "mr",
    "mr-IN", "ms", "ms-MY", "mt", "mt-MT", "my", "my-MM", "nb", "nb-NO", "ne", "ne-NP", "nl",
    "nl-BE", "nl-NL", "nn", "nn-NO", "pa", "pa-IN", "pl", "pl-PL", "pt", "pt-BR", "pt-PT",
    "ro", "ro-RO", "ru", "ru-RU", "si", "si-LK", "sk", "sk-SK", "sl", "sl-SI", "sq", "sq-AL",
    "sr", "sr-RS", "sv", "sv-FI", "sv-SE", "sw", "sw-KE", "ta", "ta-IN", "te", "te-IN", "th",
    "th-TH", "tr", "tr-TR", "uk", "uk-UA", "ur", "ur-PK", "uz", "uz-UZ", "vi", "vi-VN", "zh",
    "zh-CN", "zh-HK", "zh-TW", "zu", "zu-ZA",
];
