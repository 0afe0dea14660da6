//! Character set tokens for `Accept-Charset`

pub const COMMON: &[&str] = &[
    "utf-8", "ascii", "iso-8859-1", "iso-8859-2", "iso-8859-15", "shift_jis", "gbk", "big5",
    "koi8-r", "windows-1250", "windows-1251", "windows-1252", "windows-1253", "windows-1254",
    "windows-1255", "windows-1256", "windows-1257", "windows-1258",
];

pub const ALL: &[&str] = &[
    "us-ascii", "ascii", "iso-8859-1", "iso-8859-2", "iso-8859-3", "iso-8859-4",
    "iso-8859-5", "iso-8859-6", "iso-8859-7", "iso-8859-8", "iso-8859-9",
    "iso-8859-10", "iso-8859-13", "iso-8859-14", "iso-8859-15", "iso-8859-16",
    "iso_6937-2-add", "jis_x0201", "jis_c6226-1978", "jis_encoding", "shift_jis",
    "extended_unix_code_packed_format_for_japanese",
    "extended_unix_code_fixed_width_for_japanese", "85_4730", "sen_850200_c", "it", "es",
    "din_66003", "ns_4551-1", "nf_z_62-010", "iso-10646-utf-1", "iso_646.basic:1983",
    "iso_646.irv:1983", "nats-sefi", "nats-sefi-add", "nats-dano", "nats-dano-add",
    "sen_850200_b", "ks_c_5601-1987", "iso-2022-kr", "iso-2022-jp", "iso-2022-jp-2",
    "iso_6429-jis7-1990", "jis_c6229-1969-jp", "jis_c6229-1969-ro", "pt", "greek7-old",
    "latin-greek", "nf_z_62-010_(1973)", "latin-greek-1", "iso_5427", "js_c6228-1978",
    "bs_viewdata", "inis", "inis-8", "inis-cyrillic", "iso_5427:1981", "iso_5428-1980",
    "gb_1988-80", "gb_2312-80", "ns_4551-2", "videotex-suppl", "pt2", "es2", "msz_7795.3",
    "js_c6229-1983", "greek7", "asmo_449", "iso-ir-90", "jis_c6229-1984-a", "jis_c6229-1984-b",
    "jis_c6229-1984-b-add", "jis_c6229-1984-hand", "jis_c6229-1984-kana", "iso_2033-1983",
    "ansi_x3.110-1983", "t.61-7bit", "t.61-8bit", "ecma-cyrillic", "csa_z243.4-1985-1",
    "csa_z243.4-1985-2", "iso-8859-6-e", "iso-8859-6-i", "t.101-g2", "iso-8859-8-e",
    "iso-8859-8-i", "csn_369103", "jus_i.b1.002", "iec_p27-1", "jus_i.b1.003-serb",
    "jus_i.b1.003-mac", "greek-ccitt", "nc_nc00-10:81", "iso_6937-2-25", "gost_19768-74",
    "iso_8859-supp", "iso_10367-box", "latin-lap", "jis_x0212-1990", "ds_2089", "us-dk",
    "dk-us", "ksc5636", "unicode-1-1-utf-7", "iso-10646-ucs-2", "iso-10646-ucs-4",
    "iso-10646-ucs-basic", "iso-10646-unicode-latin1", "iso-10646-j-1", "iso-10646-j-3",
    "iso-10646-j-7", "iso-10646-j-8", "iso-unicode-ibm-1261", "iso-unicode-ibm-1268",
    "iso-unicode-ibm-1276", "iso-unicode-ibm-1264", "iso-unicode-ibm-1265", "hz-gb-2312", "gbk",
    "gb18030", "gb2312", "big5", "big5-hkscs", "utf-8", "utf-7", "utf16-be", "utf16-le",
    "utf-32", "utf-32be", "utf-32le", "bocu-1", "utf-7-imap", "iso-8859-1-windows-3.0-latin1",
    "iso-8859-2-windows-latin2", "iso-8859-3-windows-latin3", "iso-8859-9-windows-latin5",
    "hp-roman8", "adobe-standard-encoding", "ventura-us", "ventura-international", "dec-mcs",
    "ibm850", "pc-danish-norwegian", "ibm862", "pc-turkish", "ibm-symbols", "ibm-thai",
    "hp-legal", "hp-pifont", "hp-math8", "adobe-symbol-encoding", "hp-desktop", "ventura-math",
    "microsoft-publishing", "windows-31j", "macintosh", "unknown-8bit", "mnemonic",
    "mnemonic-8bit", "cp878", "viscii", "viqr", "koi8-r", "gb-2312", "windows-1250",
    "windows-1251", "windows-1252", "windows-1253", "windows-1254", "windows-1255",
    "windows-1256", "windows-1257", "windows-1258", "cp50220", "cp50221",
];
