// Generated by gen_properties from EastAsianWidth.txt.
// Unicode text segmentation property dictionary; do not edit by hand.

use crate::properties::EastAsianWidth::{self, *};
use crate::properties::Dictionary;

pub(crate) static EAST_ASIAN_WIDTH: Dictionary<EastAsianWidth> = Dictionary(&[
    (0x0020, 0x007E, Narrow),
    (0x00A1, 0x00A1, Ambiguous),
    (0x00A2, 0x00A3, Narrow),
    (0x00A4, 0x00A4, Ambiguous),
    (0x00A5, 0x00A6, Narrow),
    (0x00A7, 0x00A8, Ambiguous),
    (0x00AA, 0x00AA, Ambiguous),
    (0x00AC, 0x00AC, Narrow),
    (0x00AD, 0x00AE, Ambiguous),
    (0x00AF, 0x00AF, Narrow),
    (0x00B0, 0x00B4, Ambiguous),
    (0x00B6, 0x00BA, Ambiguous),
    (0x00BC, 0x00BF, Ambiguous),
    (0x00C6, 0x00C6, Ambiguous),
    (0x00D0, 0x00D0, Ambiguous),
    (0x00D7, 0x00D8, Ambiguous),
    (0x00DE, 0x00E1, Ambiguous),
    (0x00E6, 0x00E6, Ambiguous),
    (0x00E8, 0x00EA, Ambiguous),
    (0x00EC, 0x00ED, Ambiguous),
    (0x00F0, 0x00F0, Ambiguous),
    (0x00F2, 0x00F3, Ambiguous),
    (0x00F7, 0x00FA, Ambiguous),
    (0x00FC, 0x00FC, Ambiguous),
    (0x00FE, 0x00FE, Ambiguous),
    (0x0101, 0x0101, Ambiguous),
    (0x0111, 0x0111, Ambiguous),
    (0x0113, 0x0113, Ambiguous),
    (0x011B, 0x011B, Ambiguous),
    (0x0126, 0x0127, Ambiguous),
    (0x012B, 0x012B, Ambiguous),
    (0x0131, 0x0133, Ambiguous),
    (0x0138, 0x0138, Ambiguous),
    (0x013F, 0x0142, Ambiguous),
    (0x0144, 0x0144, Ambiguous),
    (0x0148, 0x014B, Ambiguous),
    (0x014D, 0x014D, Ambiguous),
    (0x0152, 0x0153, Ambiguous),
    (0x0166, 0x0167, Ambiguous),
    (0x016B, 0x016B, Ambiguous),
    (0x01CE, 0x01CE, Ambiguous),
    (0x01D0, 0x01D0, Ambiguous),
    (0x01D2, 0x01D2, Ambiguous),
    (0x01D4, 0x01D4, Ambiguous),
    (0x01D6, 0x01D6, Ambiguous),
    (0x01D8, 0x01D8, Ambiguous),
    (0x01DA, 0x01DA, Ambiguous),
    (0x01DC, 0x01DC, Ambiguous),
    (0x0251, 0x0251, Ambiguous),
    (0x0261, 0x0261, Ambiguous),
    (0x02C4, 0x02C4, Ambiguous),
    (0x02C7, 0x02C7, Ambiguous),
    (0x02C9, 0x02CB, Ambiguous),
    (0x02CD, 0x02CD, Ambiguous),
    (0x02D0, 0x02D0, Ambiguous),
    (0x02D8, 0x02DB, Ambiguous),
    (0x02DD, 0x02DD, Ambiguous),
    (0x02DF, 0x02DF, Ambiguous),
    (0x0300, 0x036F, Ambiguous),
    (0x0378, 0x0379, Wide),
    (0x0380, 0x0383, Wide),
    (0x038B, 0x038B, Wide),
    (0x038D, 0x038D, Wide),
    (0x0391, 0x03A1, Ambiguous),
    (0x03A2, 0x03A2, Wide),
    (0x03A3, 0x03A9, Ambiguous),
    (0x03B1, 0x03C1, Ambiguous),
    (0x03C3, 0x03C9, Ambiguous),
    (0x0401, 0x0401, Ambiguous),
    (0x0410, 0x044F, Ambiguous),
    (0x0451, 0x0451, Ambiguous),
    (0x0530, 0x0530, Wide),
    (0x0557, 0x0558, Wide),
    (0x058B, 0x058C, Wide),
    (0x0590, 0x0590, Wide),
    (0x05C8, 0x05CF, Wide),
    (0x05EB, 0x05EE, Wide),
    (0x05F5, 0x05FF, Wide),
    (0x070E, 0x070E, Wide),
    (0x074B, 0x074C, Wide),
    (0x07B2, 0x07BF, Wide),
    (0x07FB, 0x07FC, Wide),
    (0x082E, 0x082F, Wide),
    (0x083F, 0x083F, Wide),
    (0x085C, 0x085D, Wide),
    (0x085F, 0x085F, Wide),
    (0x086B, 0x086F, Wide),
    (0x0892, 0x0896, Wide),
    (0x0984, 0x0984, Wide),
    (0x098D, 0x098E, Wide),
    (0x0991, 0x0992, Wide),
    (0x09A9, 0x09A9, Wide),
    (0x09B1, 0x09B1, Wide),
    (0x09B3, 0x09B5, Wide),
    (0x09BA, 0x09BB, Wide),
    (0x09C5, 0x09C6, Wide),
    (0x09C9, 0x09CA, Wide),
    (0x09CF, 0x09D6, Wide),
    (0x09D8, 0x09DB, Wide),
    (0x09DE, 0x09DE, Wide),
    (0x09E4, 0x09E5, Wide),
    (0x09FF, 0x0A00, Wide),
    (0x0A04, 0x0A04, Wide),
    (0x0A0B, 0x0A0E, Wide),
    (0x0A11, 0x0A12, Wide),
    (0x0A29, 0x0A29, Wide),
    (0x0A31, 0x0A31, Wide),
    (0x0A34, 0x0A34, Wide),
    (0x0A37, 0x0A37, Wide),
    (0x0A3A, 0x0A3B, Wide),
    (0x0A3D, 0x0A3D, Wide),
    (0x0A43, 0x0A46, Wide),
    (0x0A49, 0x0A4A, Wide),
    (0x0A4E, 0x0A50, Wide),
    (0x0A52, 0x0A58, Wide),
    (0x0A5D, 0x0A5D, Wide),
    (0x0A5F, 0x0A65, Wide),
    (0x0A77, 0x0A80, Wide),
    (0x0A84, 0x0A84, Wide),
    (0x0A8E, 0x0A8E, Wide),
    (0x0A92, 0x0A92, Wide),
    (0x0AA9, 0x0AA9, Wide),
    (0x0AB1, 0x0AB1, Wide),
    (0x0AB4, 0x0AB4, Wide),
    (0x0ABA, 0x0ABB, Wide),
    (0x0AC6, 0x0AC6, Wide),
    (0x0ACA, 0x0ACA, Wide),
    (0x0ACE, 0x0ACF, Wide),
    (0x0AD1, 0x0ADF, Wide),
    (0x0AE4, 0x0AE5, Wide),
    (0x0AF2, 0x0AF8, Wide),
    (0x0B00, 0x0B00, Wide),
    (0x0B04, 0x0B04, Wide),
    (0x0B0D, 0x0B0E, Wide),
    (0x0B11, 0x0B12, Wide),
    (0x0B29, 0x0B29, Wide),
    (0x0B31, 0x0B31, Wide),
    (0x0B34, 0x0B34, Wide),
    (0x0B3A, 0x0B3B, Wide),
    (0x0B45, 0x0B46, Wide),
    (0x0B49, 0x0B4A, Wide),
    (0x0B4E, 0x0B54, Wide),
    (0x0B58, 0x0B5B, Wide),
    (0x0B5E, 0x0B5E, Wide),
    (0x0B64, 0x0B65, Wide),
    (0x0B78, 0x0B81, Wide),
    (0x0B84, 0x0B84, Wide),
    (0x0B8B, 0x0B8D, Wide),
    (0x0B91, 0x0B91, Wide),
    (0x0B96, 0x0B98, Wide),
    (0x0B9B, 0x0B9B, Wide),
    (0x0B9D, 0x0B9D, Wide),
    (0x0BA0, 0x0BA2, Wide),
    (0x0BA5, 0x0BA7, Wide),
    (0x0BAB, 0x0BAD, Wide),
    (0x0BBA, 0x0BBD, Wide),
    (0x0BC3, 0x0BC5, Wide),
    (0x0BC9, 0x0BC9, Wide),
    (0x0BCE, 0x0BCF, Wide),
    (0x0BD1, 0x0BD6, Wide),
    (0x0BD8, 0x0BE5, Wide),
    (0x0BFB, 0x0BFF, Wide),
    (0x0C0D, 0x0C0D, Wide),
    (0x0C11, 0x0C11, Wide),
    (0x0C29, 0x0C29, Wide),
    (0x0C3A, 0x0C3B, Wide),
    (0x0C45, 0x0C45, Wide),
    (0x0C49, 0x0C49, Wide),
    (0x0C4E, 0x0C54, Wide),
    (0x0C57, 0x0C57, Wide),
    (0x0C5B, 0x0C5B, Wide),
    (0x0C5E, 0x0C5F, Wide),
    (0x0C64, 0x0C65, Wide),
    (0x0C70, 0x0C76, Wide),
    (0x0C8D, 0x0C8D, Wide),
    (0x0C91, 0x0C91, Wide),
    (0x0CA9, 0x0CA9, Wide),
    (0x0CB4, 0x0CB4, Wide),
    (0x0CBA, 0x0CBB, Wide),
    (0x0CC5, 0x0CC5, Wide),
    (0x0CC9, 0x0CC9, Wide),
    (0x0CCE, 0x0CD4, Wide),
    (0x0CD7, 0x0CDB, Wide),
    (0x0CDF, 0x0CDF, Wide),
    (0x0CE4, 0x0CE5, Wide),
    (0x0CF0, 0x0CF0, Wide),
    (0x0CF4, 0x0CFF, Wide),
    (0x0D0D, 0x0D0D, Wide),
    (0x0D11, 0x0D11, Wide),
    (0x0D45, 0x0D45, Wide),
    (0x0D49, 0x0D49, Wide),
    (0x0D50, 0x0D53, Wide),
    (0x0D64, 0x0D65, Wide),
    (0x0D80, 0x0D80, Wide),
    (0x0D84, 0x0D84, Wide),
    (0x0D97, 0x0D99, Wide),
    (0x0DB2, 0x0DB2, Wide),
    (0x0DBC, 0x0DBC, Wide),
    (0x0DBE, 0x0DBF, Wide),
    (0x0DC7, 0x0DC9, Wide),
    (0x0DCB, 0x0DCE, Wide),
    (0x0DD5, 0x0DD5, Wide),
    (0x0DD7, 0x0DD7, Wide),
    (0x0DE0, 0x0DE5, Wide),
    (0x0DF0, 0x0DF1, Wide),
    (0x0DF5, 0x0E00, Wide),
    (0x0E3B, 0x0E3E, Wide),
    (0x0E5C, 0x0E80, Wide),
    (0x0E83, 0x0E83, Wide),
    (0x0E85, 0x0E85, Wide),
    (0x0E8B, 0x0E8B, Wide),
    (0x0EA4, 0x0EA4, Wide),
    (0x0EA6, 0x0EA6, Wide),
    (0x0EBE, 0x0EBF, Wide),
    (0x0EC5, 0x0EC5, Wide),
    (0x0EC7, 0x0EC7, Wide),
    (0x0ECF, 0x0ECF, Wide),
    (0x0EDA, 0x0EDB, Wide),
    (0x0EE0, 0x0EFF, Wide),
    (0x0F48, 0x0F48, Wide),
    (0x0F6D, 0x0F70, Wide),
    (0x0F98, 0x0F98, Wide),
    (0x0FBD, 0x0FBD, Wide),
    (0x0FCD, 0x0FCD, Wide),
    (0x0FDB, 0x0FFF, Wide),
    (0x10C6, 0x10C6, Wide),
    (0x10C8, 0x10CC, Wide),
    (0x10CE, 0x10CF, Wide),
    (0x1100, 0x115F, Wide),
    (0x1249, 0x1249, Wide),
    (0x124E, 0x124F, Wide),
    (0x1257, 0x1257, Wide),
    (0x1259, 0x1259, Wide),
    (0x125E, 0x125F, Wide),
    (0x1289, 0x1289, Wide),
    (0x128E, 0x128F, Wide),
    (0x12B1, 0x12B1, Wide),
    (0x12B6, 0x12B7, Wide),
    (0x12BF, 0x12BF, Wide),
    (0x12C1, 0x12C1, Wide),
    (0x12C6, 0x12C7, Wide),
    (0x12D7, 0x12D7, Wide),
    (0x1311, 0x1311, Wide),
    (0x1316, 0x1317, Wide),
    (0x135B, 0x135C, Wide),
    (0x137D, 0x137F, Wide),
    (0x139A, 0x139F, Wide),
    (0x13F6, 0x13F7, Wide),
    (0x13FE, 0x13FF, Wide),
    (0x169D, 0x169F, Wide),
    (0x16F9, 0x16FF, Wide),
    (0x1716, 0x171E, Wide),
    (0x1737, 0x173F, Wide),
    (0x1754, 0x175F, Wide),
    (0x176D, 0x176D, Wide),
    (0x1771, 0x1771, Wide),
    (0x1774, 0x177F, Wide),
    (0x17DE, 0x17DF, Wide),
    (0x17EA, 0x17EF, Wide),
    (0x17FA, 0x17FF, Wide),
    (0x181A, 0x181F, Wide),
    (0x1879, 0x187F, Wide),
    (0x18AB, 0x18AF, Wide),
    (0x18F6, 0x18FF, Wide),
    (0x191F, 0x191F, Wide),
    (0x192C, 0x192F, Wide),
    (0x193C, 0x193F, Wide),
    (0x1941, 0x1943, Wide),
    (0x196E, 0x196F, Wide),
    (0x1975, 0x197F, Wide),
    (0x19AC, 0x19AF, Wide),
    (0x19CA, 0x19CF, Wide),
    (0x19DB, 0x19DD, Wide),
    (0x1A1C, 0x1A1D, Wide),
    (0x1A5F, 0x1A5F, Wide),
    (0x1A7D, 0x1A7E, Wide),
    (0x1A8A, 0x1A8F, Wide),
    (0x1A9A, 0x1A9F, Wide),
    (0x1AAE, 0x1AAF, Wide),
    (0x1ADE, 0x1ADF, Wide),
    (0x1AEC, 0x1AFF, Wide),
    (0x1B4D, 0x1B4D, Wide),
    (0x1BF4, 0x1BFB, Wide),
    (0x1C38, 0x1C3A, Wide),
    (0x1C4A, 0x1C4C, Wide),
    (0x1C8B, 0x1C8F, Wide),
    (0x1CBB, 0x1CBC, Wide),
    (0x1CC8, 0x1CCF, Wide),
    (0x1CFB, 0x1CFF, Wide),
    (0x1F16, 0x1F17, Wide),
    (0x1F1E, 0x1F1F, Wide),
    (0x1F46, 0x1F47, Wide),
    (0x1F4E, 0x1F4F, Wide),
    (0x1F58, 0x1F58, Wide),
    (0x1F5A, 0x1F5A, Wide),
    (0x1F5C, 0x1F5C, Wide),
    (0x1F5E, 0x1F5E, Wide),
    (0x1F7E, 0x1F7F, Wide),
    (0x1FB5, 0x1FB5, Wide),
    (0x1FC5, 0x1FC5, Wide),
    (0x1FD4, 0x1FD5, Wide),
    (0x1FDC, 0x1FDC, Wide),
    (0x1FF0, 0x1FF1, Wide),
    (0x1FF5, 0x1FF5, Wide),
    (0x1FFF, 0x1FFF, Wide),
    (0x2010, 0x2010, Ambiguous),
    (0x2013, 0x2016, Ambiguous),
    (0x2018, 0x2019, Ambiguous),
    (0x201C, 0x201D, Ambiguous),
    (0x2020, 0x2022, Ambiguous),
    (0x2024, 0x2027, Ambiguous),
    (0x2030, 0x2030, Ambiguous),
    (0x2032, 0x2033, Ambiguous),
    (0x2035, 0x2035, Ambiguous),
    (0x203B, 0x203B, Ambiguous),
    (0x203E, 0x203E, Ambiguous),
    (0x2065, 0x2065, Wide),
    (0x2072, 0x2073, Wide),
    (0x2074, 0x2074, Ambiguous),
    (0x207F, 0x207F, Ambiguous),
    (0x2081, 0x2084, Ambiguous),
    (0x208F, 0x208F, Wide),
    (0x209D, 0x209F, Wide),
    (0x20A9, 0x20A9, Halfwidth),
    (0x20AC, 0x20AC, Ambiguous),
    (0x20C2, 0x20CF, Wide),
    (0x20F1, 0x20FF, Wide),
    (0x2103, 0x2103, Ambiguous),
    (0x2105, 0x2105, Ambiguous),
    (0x2109, 0x2109, Ambiguous),
    (0x2113, 0x2113, Ambiguous),
    (0x2116, 0x2116, Ambiguous),
    (0x2121, 0x2122, Ambiguous),
    (0x2126, 0x2126, Ambiguous),
    (0x212B, 0x212B, Ambiguous),
    (0x2153, 0x2154, Ambiguous),
    (0x215B, 0x215E, Ambiguous),
    (0x2160, 0x216B, Ambiguous),
    (0x2170, 0x2179, Ambiguous),
    (0x2189, 0x2189, Ambiguous),
    (0x218C, 0x218F, Wide),
    (0x2190, 0x2199, Ambiguous),
    (0x21B8, 0x21B9, Ambiguous),
    (0x21D2, 0x21D2, Ambiguous),
    (0x21D4, 0x21D4, Ambiguous),
    (0x21E7, 0x21E7, Ambiguous),
    (0x2200, 0x2200, Ambiguous),
    (0x2202, 0x2203, Ambiguous),
    (0x2207, 0x2208, Ambiguous),
    (0x220B, 0x220B, Ambiguous),
    (0x220F, 0x220F, Ambiguous),
    (0x2211, 0x2211, Ambiguous),
    (0x2215, 0x2215, Ambiguous),
    (0x221A, 0x221A, Ambiguous),
    (0x221D, 0x2220, Ambiguous),
    (0x2223, 0x2223, Ambiguous),
    (0x2225, 0x2225, Ambiguous),
    (0x2227, 0x222C, Ambiguous),
    (0x222E, 0x222E, Ambiguous),
    (0x2234, 0x2237, Ambiguous),
    (0x223C, 0x223D, Ambiguous),
    (0x2248, 0x2248, Ambiguous),
    (0x224C, 0x224C, Ambiguous),
    (0x2252, 0x2252, Ambiguous),
    (0x2260, 0x2261, Ambiguous),
    (0x2264, 0x2267, Ambiguous),
    (0x226A, 0x226B, Ambiguous),
    (0x226E, 0x226F, Ambiguous),
    (0x2282, 0x2283, Ambiguous),
    (0x2286, 0x2287, Ambiguous),
    (0x2295, 0x2295, Ambiguous),
    (0x2299, 0x2299, Ambiguous),
    (0x22A5, 0x22A5, Ambiguous),
    (0x22BF, 0x22BF, Ambiguous),
    (0x2312, 0x2312, Ambiguous),
    (0x231A, 0x231B, Wide),
    (0x2329, 0x232A, Wide),
    (0x23E9, 0x23EC, Wide),
    (0x23F0, 0x23F0, Wide),
    (0x23F3, 0x23F3, Wide),
    (0x242A, 0x243F, Wide),
    (0x244B, 0x245F, Wide),
    (0x2460, 0x24E9, Ambiguous),
    (0x24EB, 0x254B, Ambiguous),
    (0x2550, 0x2573, Ambiguous),
    (0x2580, 0x258F, Ambiguous),
    (0x2592, 0x2595, Ambiguous),
    (0x25A0, 0x25A1, Ambiguous),
    (0x25A3, 0x25A9, Ambiguous),
    (0x25B2, 0x25B3, Ambiguous),
    (0x25B6, 0x25B7, Ambiguous),
    (0x25BC, 0x25BD, Ambiguous),
    (0x25C0, 0x25C1, Ambiguous),
    (0x25C6, 0x25C8, Ambiguous),
    (0x25CB, 0x25CB, Ambiguous),
    (0x25CE, 0x25D1, Ambiguous),
    (0x25E2, 0x25E5, Ambiguous),
    (0x25EF, 0x25EF, Ambiguous),
    (0x25FD, 0x25FE, Wide),
    (0x2605, 0x2606, Ambiguous),
    (0x2609, 0x2609, Ambiguous),
    (0x260E, 0x260F, Ambiguous),
    (0x2614, 0x2615, Wide),
    (0x261C, 0x261C, Ambiguous),
    (0x261E, 0x261E, Ambiguous),
    (0x2630, 0x2637, Wide),
    (0x2640, 0x2640, Ambiguous),
    (0x2642, 0x2642, Ambiguous),
    (0x2648, 0x2653, Wide),
    (0x2660, 0x2661, Ambiguous),
    (0x2663, 0x2665, Ambiguous),
    (0x2667, 0x266A, Ambiguous),
    (0x266C, 0x266D, Ambiguous),
    (0x266F, 0x266F, Ambiguous),
    (0x267F, 0x267F, Wide),
    (0x268A, 0x268F, Wide),
    (0x2693, 0x2693, Wide),
    (0x269E, 0x269F, Ambiguous),
    (0x26A1, 0x26A1, Wide),
    (0x26AA, 0x26AB, Wide),
    (0x26BD, 0x26BE, Wide),
    (0x26BF, 0x26BF, Ambiguous),
    (0x26C4, 0x26C5, Wide),
    (0x26C6, 0x26CD, Ambiguous),
    (0x26CE, 0x26CE, Wide),
    (0x26CF, 0x26D3, Ambiguous),
    (0x26D4, 0x26D4, Wide),
    (0x26D5, 0x26E1, Ambiguous),
    (0x26E3, 0x26E3, Ambiguous),
    (0x26E8, 0x26E9, Ambiguous),
    (0x26EA, 0x26EA, Wide),
    (0x26EB, 0x26F1, Ambiguous),
    (0x26F2, 0x26F3, Wide),
    (0x26F4, 0x26F4, Ambiguous),
    (0x26F5, 0x26F5, Wide),
    (0x26F6, 0x26F9, Ambiguous),
    (0x26FA, 0x26FA, Wide),
    (0x26FB, 0x26FC, Ambiguous),
    (0x26FD, 0x26FD, Wide),
    (0x26FE, 0x26FF, Ambiguous),
    (0x2705, 0x2705, Wide),
    (0x270A, 0x270B, Wide),
    (0x2728, 0x2728, Wide),
    (0x273D, 0x273D, Ambiguous),
    (0x274C, 0x274C, Wide),
    (0x274E, 0x274E, Wide),
    (0x2753, 0x2755, Wide),
    (0x2757, 0x2757, Wide),
    (0x2776, 0x277F, Ambiguous),
    (0x2795, 0x2797, Wide),
    (0x27B0, 0x27B0, Wide),
    (0x27BF, 0x27BF, Wide),
    (0x27E6, 0x27ED, Narrow),
    (0x2985, 0x2986, Narrow),
    (0x2B1B, 0x2B1C, Wide),
    (0x2B50, 0x2B50, Wide),
    (0x2B55, 0x2B55, Wide),
    (0x2B56, 0x2B59, Ambiguous),
    (0x2B74, 0x2B75, Wide),
    (0x2CF4, 0x2CF8, Wide),
    (0x2D26, 0x2D26, Wide),
    (0x2D28, 0x2D2C, Wide),
    (0x2D2E, 0x2D2F, Wide),
    (0x2D68, 0x2D6E, Wide),
    (0x2D71, 0x2D7E, Wide),
    (0x2D97, 0x2D9F, Wide),
    (0x2DA7, 0x2DA7, Wide),
    (0x2DAF, 0x2DAF, Wide),
    (0x2DB7, 0x2DB7, Wide),
    (0x2DBF, 0x2DBF, Wide),
    (0x2DC7, 0x2DC7, Wide),
    (0x2DCF, 0x2DCF, Wide),
    (0x2DD7, 0x2DD7, Wide),
    (0x2DDF, 0x2DDF, Wide),
    (0x2E5E, 0x2FFF, Wide),
    (0x3000, 0x3000, Fullwidth),
    (0x3001, 0x303E, Wide),
    (0x3040, 0x3247, Wide),
    (0x3248, 0x324F, Ambiguous),
    (0x3250, 0xA4CF, Wide),
    (0xA62C, 0xA63F, Wide),
    (0xA6F8, 0xA6FF, Wide),
    (0xA7DD, 0xA7F0, Wide),
    (0xA82D, 0xA82F, Wide),
    (0xA83A, 0xA83F, Wide),
    (0xA878, 0xA87F, Wide),
    (0xA8C6, 0xA8CD, Wide),
    (0xA8DA, 0xA8DF, Wide),
    (0xA954, 0xA95E, Wide),
    (0xA960, 0xA97F, Wide),
    (0xA9CE, 0xA9CE, Wide),
    (0xA9DA, 0xA9DD, Wide),
    (0xA9FF, 0xA9FF, Wide),
    (0xAA37, 0xAA3F, Wide),
    (0xAA4E, 0xAA4F, Wide),
    (0xAA5A, 0xAA5B, Wide),
    (0xAAC3, 0xAADA, Wide),
    (0xAAF7, 0xAB00, Wide),
    (0xAB07, 0xAB08, Wide),
    (0xAB0F, 0xAB10, Wide),
    (0xAB17, 0xAB1F, Wide),
    (0xAB27, 0xAB27, Wide),
    (0xAB2F, 0xAB2F, Wide),
    (0xAB6C, 0xAB6F, Wide),
    (0xABEE, 0xABEF, Wide),
    (0xABFA, 0xD7AF, Wide),
    (0xD7C7, 0xD7CA, Wide),
    (0xD7FC, 0xD7FF, Wide),
    (0xE000, 0xF8FF, Ambiguous),
    (0xF900, 0xFAFF, Wide),
    (0xFB07, 0xFB12, Wide),
    (0xFB18, 0xFB1C, Wide),
    (0xFB37, 0xFB37, Wide),
    (0xFB3D, 0xFB3D, Wide),
    (0xFB3F, 0xFB3F, Wide),
    (0xFB42, 0xFB42, Wide),
    (0xFB45, 0xFB45, Wide),
    (0xFDD0, 0xFDEF, Wide),
    (0xFE00, 0xFE0F, Ambiguous),
    (0xFE10, 0xFE1F, Wide),
    (0xFE30, 0xFE6F, Wide),
    (0xFE75, 0xFE75, Wide),
    (0xFEFD, 0xFEFE, Wide),
    (0xFF00, 0xFF00, Wide),
    (0xFF01, 0xFF60, Fullwidth),
    (0xFF61, 0xFFBE, Halfwidth),
    (0xFFBF, 0xFFC1, Wide),
    (0xFFC2, 0xFFC7, Halfwidth),
    (0xFFC8, 0xFFC9, Wide),
    (0xFFCA, 0xFFCF, Halfwidth),
    (0xFFD0, 0xFFD1, Wide),
    (0xFFD2, 0xFFD7, Halfwidth),
    (0xFFD8, 0xFFD9, Wide),
    (0xFFDA, 0xFFDC, Halfwidth),
    (0xFFDD, 0xFFDF, Wide),
    (0xFFE0, 0xFFE6, Fullwidth),
    (0xFFE7, 0xFFE7, Wide),
    (0xFFE8, 0xFFEE, Halfwidth),
    (0xFFEF, 0xFFF8, Wide),
    (0xFFFD, 0xFFFD, Ambiguous),
    (0xFFFE, 0xFFFF, Wide),
    (0x1000C, 0x1000C, Wide),
    (0x10027, 0x10027, Wide),
    (0x1003B, 0x1003B, Wide),
    (0x1003E, 0x1003E, Wide),
    (0x1004E, 0x1004F, Wide),
    (0x1005E, 0x1007F, Wide),
    (0x100FB, 0x100FF, Wide),
    (0x10103, 0x10106, Wide),
    (0x10134, 0x10136, Wide),
    (0x1018F, 0x1018F, Wide),
    (0x1019D, 0x1019F, Wide),
    (0x101A1, 0x101CF, Wide),
    (0x101FE, 0x1027F, Wide),
    (0x1029D, 0x1029F, Wide),
    (0x102D1, 0x102DF, Wide),
    (0x102FC, 0x102FF, Wide),
    (0x10324, 0x1032C, Wide),
    (0x1034B, 0x1034F, Wide),
    (0x1037B, 0x1037F, Wide),
    (0x1039E, 0x1039E, Wide),
    (0x103C4, 0x103C7, Wide),
    (0x103D6, 0x103FF, Wide),
    (0x1049E, 0x1049F, Wide),
    (0x104AA, 0x104AF, Wide),
    (0x104D4, 0x104D7, Wide),
    (0x104FC, 0x104FF, Wide),
    (0x10528, 0x1052F, Wide),
    (0x10564, 0x1056E, Wide),
    (0x1057B, 0x1057B, Wide),
    (0x1058B, 0x1058B, Wide),
    (0x10593, 0x10593, Wide),
    (0x10596, 0x10596, Wide),
    (0x105A2, 0x105A2, Wide),
    (0x105B2, 0x105B2, Wide),
    (0x105BA, 0x105BA, Wide),
    (0x105BD, 0x105BF, Wide),
    (0x105F4, 0x105FF, Wide),
    (0x10737, 0x1073F, Wide),
    (0x10756, 0x1075F, Wide),
    (0x10768, 0x1077F, Wide),
    (0x10786, 0x10786, Wide),
    (0x107B1, 0x107B1, Wide),
    (0x107BB, 0x107FF, Wide),
    (0x10806, 0x10807, Wide),
    (0x10809, 0x10809, Wide),
    (0x10836, 0x10836, Wide),
    (0x10839, 0x1083B, Wide),
    (0x1083D, 0x1083E, Wide),
    (0x10856, 0x10856, Wide),
    (0x1089F, 0x108A6, Wide),
    (0x108B0, 0x108DF, Wide),
    (0x108F3, 0x108F3, Wide),
    (0x108F6, 0x108FA, Wide),
    (0x1091C, 0x1091E, Wide),
    (0x1093A, 0x1093E, Wide),
    (0x1095A, 0x1097F, Wide),
    (0x109B8, 0x109BB, Wide),
    (0x109D0, 0x109D1, Wide),
    (0x10A04, 0x10A04, Wide),
    (0x10A07, 0x10A0B, Wide),
    (0x10A14, 0x10A14, Wide),
    (0x10A18, 0x10A18, Wide),
    (0x10A36, 0x10A37, Wide),
    (0x10A3B, 0x10A3E, Wide),
    (0x10A49, 0x10A4F, Wide),
    (0x10A59, 0x10A5F, Wide),
    (0x10AA0, 0x10ABF, Wide),
    (0x10AE7, 0x10AEA, Wide),
    (0x10AF7, 0x10AFF, Wide),
    (0x10B36, 0x10B38, Wide),
    (0x10B56, 0x10B57, Wide),
    (0x10B73, 0x10B77, Wide),
    (0x10B92, 0x10B98, Wide),
    (0x10B9D, 0x10BA8, Wide),
    (0x10BB0, 0x10BFF, Wide),
    (0x10C49, 0x10C7F, Wide),
    (0x10CB3, 0x10CBF, Wide),
    (0x10CF3, 0x10CF9, Wide),
    (0x10D28, 0x10D2F, Wide),
    (0x10D3A, 0x10D3F, Wide),
    (0x10D66, 0x10D68, Wide),
    (0x10D86, 0x10D8D, Wide),
    (0x10D90, 0x10E5F, Wide),
    (0x10E7F, 0x10E7F, Wide),
    (0x10EAA, 0x10EAA, Wide),
    (0x10EAE, 0x10EAF, Wide),
    (0x10EB2, 0x10EC1, Wide),
    (0x10EC8, 0x10ECF, Wide),
    (0x10ED9, 0x10EF9, Wide),
    (0x10F28, 0x10F2F, Wide),
    (0x10F5A, 0x10F6F, Wide),
    (0x10F8A, 0x10FAF, Wide),
    (0x10FCC, 0x10FDF, Wide),
    (0x10FF7, 0x10FFF, Wide),
    (0x1104E, 0x11051, Wide),
    (0x11076, 0x1107E, Wide),
    (0x110C3, 0x110CC, Wide),
    (0x110CE, 0x110CF, Wide),
    (0x110E9, 0x110EF, Wide),
    (0x110FA, 0x110FF, Wide),
    (0x11135, 0x11135, Wide),
    (0x11148, 0x1114F, Wide),
    (0x11177, 0x1117F, Wide),
    (0x111E0, 0x111E0, Wide),
    (0x111F5, 0x111FF, Wide),
    (0x11212, 0x11212, Wide),
    (0x11242, 0x1127F, Wide),
    (0x11287, 0x11287, Wide),
    (0x11289, 0x11289, Wide),
    (0x1128E, 0x1128E, Wide),
    (0x1129E, 0x1129E, Wide),
    (0x112AA, 0x112AF, Wide),
    (0x112EB, 0x112EF, Wide),
    (0x112FA, 0x112FF, Wide),
    (0x11304, 0x11304, Wide),
    (0x1130D, 0x1130E, Wide),
    (0x11311, 0x11312, Wide),
    (0x11329, 0x11329, Wide),
    (0x11331, 0x11331, Wide),
    (0x11334, 0x11334, Wide),
    (0x1133A, 0x1133A, Wide),
    (0x11345, 0x11346, Wide),
    (0x11349, 0x1134A, Wide),
    (0x1134E, 0x1134F, Wide),
    (0x11351, 0x11356, Wide),
    (0x11358, 0x1135C, Wide),
    (0x11364, 0x11365, Wide),
    (0x1136D, 0x1136F, Wide),
    (0x11375, 0x1137F, Wide),
    (0x1138A, 0x1138A, Wide),
    (0x1138C, 0x1138D, Wide),
    (0x1138F, 0x1138F, Wide),
    (0x113B6, 0x113B6, Wide),
    (0x113C1, 0x113C1, Wide),
    (0x113C3, 0x113C4, Wide),
    (0x113C6, 0x113C6, Wide),
    (0x113CB, 0x113CB, Wide),
    (0x113D6, 0x113D6, Wide),
    (0x113D9, 0x113E0, Wide),
    (0x113E3, 0x113FF, Wide),
    (0x1145C, 0x1145C, Wide),
    (0x11462, 0x1147F, Wide),
    (0x114C8, 0x114CF, Wide),
    (0x114DA, 0x1157F, Wide),
    (0x115B6, 0x115B7, Wide),
    (0x115DE, 0x115FF, Wide),
    (0x11645, 0x1164F, Wide),
    (0x1165A, 0x1165F, Wide),
    (0x1166D, 0x1167F, Wide),
    (0x116BA, 0x116BF, Wide),
    (0x116CA, 0x116CF, Wide),
    (0x116E4, 0x116FF, Wide),
    (0x1171B, 0x1171C, Wide),
    (0x1172C, 0x1172F, Wide),
    (0x11747, 0x117FF, Wide),
    (0x1183C, 0x1189F, Wide),
    (0x118F3, 0x118FE, Wide),
    (0x11907, 0x11908, Wide),
    (0x1190A, 0x1190B, Wide),
    (0x11914, 0x11914, Wide),
    (0x11917, 0x11917, Wide),
    (0x11936, 0x11936, Wide),
    (0x11939, 0x1193A, Wide),
    (0x11947, 0x1194F, Wide),
    (0x1195A, 0x1199F, Wide),
    (0x119A8, 0x119A9, Wide),
    (0x119D8, 0x119D9, Wide),
    (0x119E5, 0x119FF, Wide),
    (0x11A48, 0x11A4F, Wide),
    (0x11AA3, 0x11AAF, Wide),
    (0x11AF9, 0x11AFF, Wide),
    (0x11B0A, 0x11B5F, Wide),
    (0x11B68, 0x11BBF, Wide),
    (0x11BE2, 0x11BEF, Wide),
    (0x11BFA, 0x11BFF, Wide),
    (0x11C09, 0x11C09, Wide),
    (0x11C37, 0x11C37, Wide),
    (0x11C46, 0x11C4F, Wide),
    (0x11C6D, 0x11C6F, Wide),
    (0x11C90, 0x11C91, Wide),
    (0x11CA8, 0x11CA8, Wide),
    (0x11CB7, 0x11CFF, Wide),
    (0x11D07, 0x11D07, Wide),
    (0x11D0A, 0x11D0A, Wide),
    (0x11D37, 0x11D39, Wide),
    (0x11D3B, 0x11D3B, Wide),
    (0x11D3E, 0x11D3E, Wide),
    (0x11D48, 0x11D4F, Wide),
    (0x11D5A, 0x11D5F, Wide),
    (0x11D66, 0x11D66, Wide),
    (0x11D69, 0x11D69, Wide),
    (0x11D8F, 0x11D8F, Wide),
    (0x11D92, 0x11D92, Wide),
    (0x11D99, 0x11D9F, Wide),
    (0x11DAA, 0x11DAF, Wide),
    (0x11DDC, 0x11DDF, Wide),
    (0x11DEA, 0x11EDF, Wide),
    (0x11EF9, 0x11EFF, Wide),
    (0x11F11, 0x11F11, Wide),
    (0x11F3B, 0x11F3D, Wide),
    (0x11F5B, 0x11FAF, Wide),
    (0x11FB1, 0x11FBF, Wide),
    (0x11FF2, 0x11FFE, Wide),
    (0x1239A, 0x123FF, Wide),
    (0x1246F, 0x1246F, Wide),
    (0x12475, 0x1247F, Wide),
    (0x12544, 0x12F8F, Wide),
    (0x12FF3, 0x12FFF, Wide),
    (0x13456, 0x1345F, Wide),
    (0x143FB, 0x143FF, Wide),
    (0x14647, 0x160FF, Wide),
    (0x1613A, 0x167FF, Wide),
    (0x16A39, 0x16A3F, Wide),
    (0x16A5F, 0x16A5F, Wide),
    (0x16A6A, 0x16A6D, Wide),
    (0x16ABF, 0x16ABF, Wide),
    (0x16ACA, 0x16ACF, Wide),
    (0x16AEE, 0x16AEF, Wide),
    (0x16AF6, 0x16AFF, Wide),
    (0x16B46, 0x16B4F, Wide),
    (0x16B5A, 0x16B5A, Wide),
    (0x16B62, 0x16B62, Wide),
    (0x16B78, 0x16B7C, Wide),
    (0x16B90, 0x16D3F, Wide),
    (0x16D7A, 0x16E3F, Wide),
    (0x16E9B, 0x16E9F, Wide),
    (0x16EB9, 0x16EBA, Wide),
    (0x16ED4, 0x16EFF, Wide),
    (0x16F4B, 0x16F4E, Wide),
    (0x16F88, 0x16F8E, Wide),
    (0x16FA0, 0x1BBFF, Wide),
    (0x1BC6B, 0x1BC6F, Wide),
    (0x1BC7D, 0x1BC7F, Wide),
    (0x1BC89, 0x1BC8F, Wide),
    (0x1BC9A, 0x1BC9B, Wide),
    (0x1BCA4, 0x1CBFF, Wide),
    (0x1CCFD, 0x1CCFF, Wide),
    (0x1CEB4, 0x1CEB9, Wide),
    (0x1CED1, 0x1CEDF, Wide),
    (0x1CEF1, 0x1CEFF, Wide),
    (0x1CF2E, 0x1CF2F, Wide),
    (0x1CF47, 0x1CF4F, Wide),
    (0x1CFC4, 0x1CFFF, Wide),
    (0x1D0F6, 0x1D0FF, Wide),
    (0x1D127, 0x1D128, Wide),
    (0x1D1EB, 0x1D1FF, Wide),
    (0x1D246, 0x1D2BF, Wide),
    (0x1D2D4, 0x1D2DF, Wide),
    (0x1D2F4, 0x1D376, Wide),
    (0x1D379, 0x1D3FF, Wide),
    (0x1D455, 0x1D455, Wide),
    (0x1D49D, 0x1D49D, Wide),
    (0x1D4A0, 0x1D4A1, Wide),
    (0x1D4A3, 0x1D4A4, Wide),
    (0x1D4A7, 0x1D4A8, Wide),
    (0x1D4AD, 0x1D4AD, Wide),
    (0x1D4BA, 0x1D4BA, Wide),
    (0x1D4BC, 0x1D4BC, Wide),
    (0x1D4C4, 0x1D4C4, Wide),
    (0x1D506, 0x1D506, Wide),
    (0x1D50B, 0x1D50C, Wide),
    (0x1D515, 0x1D515, Wide),
    (0x1D51D, 0x1D51D, Wide),
    (0x1D53A, 0x1D53A, Wide),
    (0x1D53F, 0x1D53F, Wide),
    (0x1D545, 0x1D545, Wide),
    (0x1D547, 0x1D549, Wide),
    (0x1D551, 0x1D551, Wide),
    (0x1D6A6, 0x1D6A7, Wide),
    (0x1D7CC, 0x1D7CD, Wide),
    (0x1DA8C, 0x1DA9A, Wide),
    (0x1DAA0, 0x1DAA0, Wide),
    (0x1DAB0, 0x1DEFF, Wide),
    (0x1DF1F, 0x1DF24, Wide),
    (0x1DF2B, 0x1DFFF, Wide),
    (0x1E007, 0x1E007, Wide),
    (0x1E019, 0x1E01A, Wide),
    (0x1E022, 0x1E022, Wide),
    (0x1E025, 0x1E025, Wide),
    (0x1E02B, 0x1E02F, Wide),
    (0x1E06E, 0x1E08E, Wide),
    (0x1E090, 0x1E0FF, Wide),
    (0x1E12D, 0x1E12F, Wide),
    (0x1E13E, 0x1E13F, Wide),
    (0x1E14A, 0x1E14D, Wide),
    (0x1E150, 0x1E28F, Wide),
    (0x1E2AF, 0x1E2BF, Wide),
    (0x1E2FA, 0x1E2FE, Wide),
    (0x1E300, 0x1E4CF, Wide),
    (0x1E4FA, 0x1E5CF, Wide),
    (0x1E5FB, 0x1E5FE, Wide),
    (0x1E600, 0x1E6BF, Wide),
    (0x1E6DF, 0x1E6DF, Wide),
    (0x1E6F6, 0x1E6FD, Wide),
    (0x1E700, 0x1E7DF, Wide),
    (0x1E7E7, 0x1E7E7, Wide),
    (0x1E7EC, 0x1E7EC, Wide),
    (0x1E7EF, 0x1E7EF, Wide),
    (0x1E7FF, 0x1E7FF, Wide),
    (0x1E8C5, 0x1E8C6, Wide),
    (0x1E8D7, 0x1E8FF, Wide),
    (0x1E94C, 0x1E94F, Wide),
    (0x1E95A, 0x1E95D, Wide),
    (0x1E960, 0x1EC70, Wide),
    (0x1ECB5, 0x1ED00, Wide),
    (0x1ED3E, 0x1EDFF, Wide),
    (0x1EE04, 0x1EE04, Wide),
    (0x1EE20, 0x1EE20, Wide),
    (0x1EE23, 0x1EE23, Wide),
    (0x1EE25, 0x1EE26, Wide),
    (0x1EE28, 0x1EE28, Wide),
    (0x1EE33, 0x1EE33, Wide),
    (0x1EE38, 0x1EE38, Wide),
    (0x1EE3A, 0x1EE3A, Wide),
    (0x1EE3C, 0x1EE41, Wide),
    (0x1EE43, 0x1EE46, Wide),
    (0x1EE48, 0x1EE48, Wide),
    (0x1EE4A, 0x1EE4A, Wide),
    (0x1EE4C, 0x1EE4C, Wide),
    (0x1EE50, 0x1EE50, Wide),
    (0x1EE53, 0x1EE53, Wide),
    (0x1EE55, 0x1EE56, Wide),
    (0x1EE58, 0x1EE58, Wide),
    (0x1EE5A, 0x1EE5A, Wide),
    (0x1EE5C, 0x1EE5C, Wide),
    (0x1EE5E, 0x1EE5E, Wide),
    (0x1EE60, 0x1EE60, Wide),
    (0x1EE63, 0x1EE63, Wide),
    (0x1EE65, 0x1EE66, Wide),
    (0x1EE6B, 0x1EE6B, Wide),
    (0x1EE73, 0x1EE73, Wide),
    (0x1EE78, 0x1EE78, Wide),
    (0x1EE7D, 0x1EE7D, Wide),
    (0x1EE7F, 0x1EE7F, Wide),
    (0x1EE8A, 0x1EE8A, Wide),
    (0x1EE9C, 0x1EEA0, Wide),
    (0x1EEA4, 0x1EEA4, Wide),
    (0x1EEAA, 0x1EEAA, Wide),
    (0x1EEBC, 0x1EEEF, Wide),
    (0x1EEF2, 0x1EFFF, Wide),
    (0x1F004, 0x1F004, Wide),
    (0x1F02C, 0x1F02F, Wide),
    (0x1F094, 0x1F09F, Wide),
    (0x1F0AF, 0x1F0B0, Wide),
    (0x1F0C0, 0x1F0C0, Wide),
    (0x1F0CF, 0x1F0D0, Wide),
    (0x1F0F6, 0x1F0FF, Wide),
    (0x1F100, 0x1F10A, Ambiguous),
    (0x1F110, 0x1F12D, Ambiguous),
    (0x1F130, 0x1F169, Ambiguous),
    (0x1F170, 0x1F18D, Ambiguous),
    (0x1F18E, 0x1F18E, Wide),
    (0x1F18F, 0x1F190, Ambiguous),
    (0x1F191, 0x1F19A, Wide),
    (0x1F19B, 0x1F1AC, Ambiguous),
    (0x1F1AE, 0x1F1E5, Wide),
    (0x1F200, 0x1F320, Wide),
    (0x1F32D, 0x1F335, Wide),
    (0x1F337, 0x1F37C, Wide),
    (0x1F37E, 0x1F393, Wide),
    (0x1F3A0, 0x1F3CA, Wide),
    (0x1F3CF, 0x1F3D3, Wide),
    (0x1F3E0, 0x1F3F0, Wide),
    (0x1F3F4, 0x1F3F4, Wide),
    (0x1F3F8, 0x1F43E, Wide),
    (0x1F440, 0x1F440, Wide),
    (0x1F442, 0x1F4FC, Wide),
    (0x1F4FF, 0x1F53D, Wide),
    (0x1F54B, 0x1F54E, Wide),
    (0x1F550, 0x1F567, Wide),
    (0x1F57A, 0x1F57A, Wide),
    (0x1F595, 0x1F596, Wide),
    (0x1F5A4, 0x1F5A4, Wide),
    (0x1F5FB, 0x1F64F, Wide),
    (0x1F680, 0x1F6C5, Wide),
    (0x1F6CC, 0x1F6CC, Wide),
    (0x1F6D0, 0x1F6D2, Wide),
    (0x1F6D5, 0x1F6DF, Wide),
    (0x1F6EB, 0x1F6EF, Wide),
    (0x1F6F4, 0x1F6FF, Wide),
    (0x1F7DA, 0x1F7FF, Wide),
    (0x1F80C, 0x1F80F, Wide),
    (0x1F848, 0x1F84F, Wide),
    (0x1F85A, 0x1F85F, Wide),
    (0x1F888, 0x1F88F, Wide),
    (0x1F8AE, 0x1F8AF, Wide),
    (0x1F8BC, 0x1F8BF, Wide),
    (0x1F8C2, 0x1F8CF, Wide),
    (0x1F8D9, 0x1F8FF, Wide),
    (0x1F90C, 0x1F93A, Wide),
    (0x1F93C, 0x1F945, Wide),
    (0x1F947, 0x1F9FF, Wide),
    (0x1FA58, 0x1FA5F, Wide),
    (0x1FA6E, 0x1FAFF, Wide),
    (0x1FB93, 0x1FB93, Wide),
    (0x1FBFB, 0xE0000, Wide),
    (0xE0002, 0xE001F, Wide),
    (0xE0080, 0xE00FF, Wide),
    (0xE0100, 0xE01EF, Ambiguous),
    (0xE01F0, 0xEFFFF, Wide),
    (0xF0000, 0xFFFFD, Ambiguous),
    (0xFFFFE, 0xFFFFF, Wide),
    (0x100000, 0x10FFFD, Ambiguous),
    (0x10FFFE, 0x10FFFF, Wide),
]);
